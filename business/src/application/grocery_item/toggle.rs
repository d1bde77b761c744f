use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::grocery_item::errors::GroceryItemError;
use crate::domain::grocery_item::model::GroceryItem;
use crate::domain::grocery_item::repository::GroceryItemRepository;
use crate::domain::grocery_item::use_cases::toggle::{
    ToggleGroceryItemParams, ToggleGroceryItemUseCase,
};
use crate::domain::logger::Logger;

pub struct ToggleGroceryItemUseCaseImpl {
    pub repository: Arc<dyn GroceryItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleGroceryItemUseCase for ToggleGroceryItemUseCaseImpl {
    async fn execute(
        &self,
        params: ToggleGroceryItemParams,
    ) -> Result<GroceryItem, GroceryItemError> {
        self.logger
            .info(&format!("Toggling grocery item completion: {}", params.id));

        let updated = self
            .repository
            .toggle_completed(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => GroceryItemError::NotFound,
                other => GroceryItemError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Grocery item {} completed: {}",
            updated.id, updated.completed
        ));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grocery_item::model::NewGroceryItem;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub GroceryItemRepo {}

        #[async_trait]
        impl GroceryItemRepository for GroceryItemRepo {
            async fn get_all(&self) -> Result<Vec<GroceryItem>, RepositoryError>;
            async fn insert(&self, item: NewGroceryItem) -> Result<GroceryItem, RepositoryError>;
            async fn toggle_completed(&self, id: u64) -> Result<GroceryItem, RepositoryError>;
            async fn delete(&self, id: u64) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_toggle_completion() {
        let mut mock_repo = MockGroceryItemRepo::new();
        mock_repo
            .expect_toggle_completed()
            .with(eq(1))
            .times(1)
            .returning(|id| {
                Ok(GroceryItem::from_repository(
                    id,
                    "Milk".to_string(),
                    "🥛".to_string(),
                    true,
                    1,
                    None,
                    chrono::Utc::now(),
                ))
            });

        let use_case = ToggleGroceryItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(ToggleGroceryItemParams { id: 1 }).await;

        let item = result.unwrap();
        assert_eq!(item.id, 1);
        assert!(item.completed);
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_does_not_exist() {
        let mut mock_repo = MockGroceryItemRepo::new();
        mock_repo
            .expect_toggle_completed()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = ToggleGroceryItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(ToggleGroceryItemParams { id: 99 }).await;

        assert!(matches!(result.unwrap_err(), GroceryItemError::NotFound));
    }
}
