use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::grocery_item::errors::GroceryItemError;
use crate::domain::grocery_item::model::{GroceryItem, NewGroceryItem};
use crate::domain::grocery_item::repository::GroceryItemRepository;
use crate::domain::grocery_item::use_cases::add::{AddGroceryItemParams, AddGroceryItemUseCase};
use crate::domain::logger::Logger;

pub struct AddGroceryItemUseCaseImpl {
    pub repository: Arc<dyn GroceryItemRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddGroceryItemUseCase for AddGroceryItemUseCaseImpl {
    async fn execute(&self, params: AddGroceryItemParams) -> Result<GroceryItem, GroceryItemError> {
        self.logger
            .info(&format!("Adding grocery item: {}", params.name));

        // Items added from a category template take the template's name and emoji
        let (name, emoji) = match params.category_item_id {
            Some(template_id) => {
                let template = self
                    .category_repository
                    .find_item(template_id)
                    .await?
                    .ok_or(GroceryItemError::CategoryItemNotFound)?;
                self.logger.debug(&format!(
                    "Using category template {} ({})",
                    template.id, template.name
                ));
                (template.name, template.emoji)
            }
            None => (params.name, params.emoji),
        };

        let new_item =
            NewGroceryItem::new(name, emoji, params.quantity, params.category_item_id)?;
        let item = self.repository.insert(new_item).await?;

        self.logger.info(&format!("Grocery item added: {}", item.id));
        Ok(item)
    }
}
