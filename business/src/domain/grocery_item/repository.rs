use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{GroceryItem, NewGroceryItem};

#[async_trait]
pub trait GroceryItemRepository: Send + Sync {
    /// Returns every stored item in insertion order.
    async fn get_all(&self) -> Result<Vec<GroceryItem>, RepositoryError>;
    /// Stores the item under a freshly assigned id. Ids are never reused.
    async fn insert(&self, item: NewGroceryItem) -> Result<GroceryItem, RepositoryError>;
    /// Flips the completed flag atomically and returns the updated item.
    async fn toggle_completed(&self, id: u64) -> Result<GroceryItem, RepositoryError>;
    async fn delete(&self, id: u64) -> Result<(), RepositoryError>;
}
