use async_trait::async_trait;

use crate::domain::grocery_item::errors::GroceryItemError;

pub struct RemoveGroceryItemParams {
    pub id: u64,
}

#[async_trait]
pub trait RemoveGroceryItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveGroceryItemParams) -> Result<(), GroceryItemError>;
}
