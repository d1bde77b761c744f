use sqlx::FromRow;

use business::domain::category::model::{Category, CategoryItem};
use business::domain::errors::RepositoryError;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, FromRow)]
pub struct CategoryItemEntity {
    pub id: i64,
    pub category_id: i32,
    pub name: String,
    pub emoji: String,
}

impl CategoryItemEntity {
    pub fn into_domain(self) -> Result<CategoryItem, RepositoryError> {
        let id = u64::try_from(self.id).map_err(|_| RepositoryError::DatabaseError)?;
        Ok(CategoryItem::new(id, self.name, self.emoji))
    }
}

/// Groups item rows under their category rows, keeping the order of both inputs.
pub fn assemble(
    categories: Vec<CategoryEntity>,
    items: Vec<CategoryItemEntity>,
) -> Result<Vec<Category>, RepositoryError> {
    let mut result: Vec<(i32, Category)> = categories
        .into_iter()
        .map(|c| (c.id, Category::new(c.name, Vec::new())))
        .collect();

    for item in items {
        if let Some((_, category)) = result.iter_mut().find(|(id, _)| *id == item.category_id) {
            category.items.push(item.into_domain()?);
        }
    }

    Ok(result.into_iter().map(|(_, category)| category).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, category_id: i32, name: &str) -> CategoryItemEntity {
        CategoryItemEntity {
            id,
            category_id,
            name: name.to_string(),
            emoji: "🛒".to_string(),
        }
    }

    #[test]
    fn should_group_items_under_their_category() {
        let categories = vec![
            CategoryEntity {
                id: 1,
                name: "Produce".to_string(),
            },
            CategoryEntity {
                id: 2,
                name: "Dairy".to_string(),
            },
        ];
        let items = vec![
            item(101, 1, "Apples"),
            item(201, 2, "Milk"),
            item(102, 1, "Bananas"),
        ];

        let assembled = assemble(categories, items).unwrap();

        assert_eq!(assembled.len(), 2);
        let produce: Vec<_> = assembled[0].items.iter().map(|i| i.id).collect();
        assert_eq!(produce, vec![101, 102]);
        assert_eq!(assembled[1].items[0].name, "Milk");
    }

    #[test]
    fn should_keep_categories_without_items() {
        let categories = vec![CategoryEntity {
            id: 3,
            name: "Bakery".to_string(),
        }];

        let assembled = assemble(categories, vec![]).unwrap();

        assert_eq!(assembled, vec![Category::new("Bakery", vec![])]);
    }
}
