use async_trait::async_trait;

use business::domain::category::model::{Category, CategoryItem};
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;

use crate::catalog::default_categories;

/// Serves a fixed, read-only set of categories.
pub struct CategoryRepositoryInMemory {
    categories: Vec<Category>,
}

impl CategoryRepositoryInMemory {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

impl Default for CategoryRepositoryInMemory {
    fn default() -> Self {
        Self::new(default_categories())
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.categories.clone())
    }

    async fn find_item(&self, id: u64) -> Result<Option<CategoryItem>, RepositoryError> {
        Ok(self
            .categories
            .iter()
            .find_map(|category| category.find_item(id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_identical_data_on_repeated_calls() {
        let repo = CategoryRepositoryInMemory::default();

        let first = repo.get_all().await.unwrap();
        let second = repo.get_all().await.unwrap();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn should_find_template_in_any_category() {
        let repo = CategoryRepositoryInMemory::default();

        let cheese = repo.find_item(202).await.unwrap();
        let coffee = repo.find_item(601).await.unwrap();

        assert_eq!(cheese, Some(CategoryItem::new(202, "Cheese", "🧀")));
        assert_eq!(coffee.map(|i| i.name), Some("Coffee".to_string()));
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_template() {
        let repo = CategoryRepositoryInMemory::new(vec![]);

        assert_eq!(repo.find_item(101).await.unwrap(), None);
    }
}
