use async_trait::async_trait;

use crate::domain::grocery_item::errors::GroceryItemError;
use crate::domain::grocery_item::model::GroceryItem;

#[async_trait]
pub trait GetAllGroceryItemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<GroceryItem>, GroceryItemError>;
}
