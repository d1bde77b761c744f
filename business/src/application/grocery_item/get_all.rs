use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::grocery_item::errors::GroceryItemError;
use crate::domain::grocery_item::model::GroceryItem;
use crate::domain::grocery_item::repository::GroceryItemRepository;
use crate::domain::grocery_item::use_cases::get_all::GetAllGroceryItemsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllGroceryItemsUseCaseImpl {
    pub repository: Arc<dyn GroceryItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllGroceryItemsUseCase for GetAllGroceryItemsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<GroceryItem>, GroceryItemError> {
        self.logger.info("Getting all grocery items");
        let items = self.repository.get_all().await?;
        self.logger
            .info(&format!("Retrieved {} grocery items", items.len()));
        Ok(items)
    }
}
