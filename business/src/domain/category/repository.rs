use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Category, CategoryItem};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn find_item(&self, id: u64) -> Result<Option<CategoryItem>, RepositoryError>;
}
