use async_trait::async_trait;

use crate::domain::grocery_item::errors::GroceryItemError;
use crate::domain::grocery_item::model::GroceryItem;

pub struct AddGroceryItemParams {
    pub name: String,
    pub emoji: String,
    pub quantity: Option<u32>,
    pub category_item_id: Option<u64>,
}

#[async_trait]
pub trait AddGroceryItemUseCase: Send + Sync {
    async fn execute(&self, params: AddGroceryItemParams) -> Result<GroceryItem, GroceryItemError>;
}
