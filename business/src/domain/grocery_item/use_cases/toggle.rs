use async_trait::async_trait;

use crate::domain::grocery_item::errors::GroceryItemError;
use crate::domain::grocery_item::model::GroceryItem;

pub struct ToggleGroceryItemParams {
    pub id: u64,
}

#[async_trait]
pub trait ToggleGroceryItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ToggleGroceryItemParams,
    ) -> Result<GroceryItem, GroceryItemError>;
}
