use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::grocery_item::errors::GroceryItemError;
use crate::domain::grocery_item::repository::GroceryItemRepository;
use crate::domain::grocery_item::use_cases::remove::{
    RemoveGroceryItemParams, RemoveGroceryItemUseCase,
};
use crate::domain::logger::Logger;

pub struct RemoveGroceryItemUseCaseImpl {
    pub repository: Arc<dyn GroceryItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveGroceryItemUseCase for RemoveGroceryItemUseCaseImpl {
    async fn execute(&self, params: RemoveGroceryItemParams) -> Result<(), GroceryItemError> {
        self.logger
            .info(&format!("Removing grocery item: {}", params.id));

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => GroceryItemError::NotFound,
                other => GroceryItemError::Repository(other),
            })?;

        self.logger
            .info(&format!("Grocery item removed: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grocery_item::model::{GroceryItem, NewGroceryItem};
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
    async fn should_remove_existing_grocery_item() {
        let mut mock_repo = MockGroceryItemRepo::new();
        mock_repo
            .expect_delete()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = RemoveGroceryItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(RemoveGroceryItemParams { id: 3 }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_removing_nonexistent() {
        let mut mock_repo = MockGroceryItemRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = RemoveGroceryItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(RemoveGroceryItemParams { id: 42 }).await;

        assert!(matches!(result.unwrap_err(), GroceryItemError::NotFound));
    }

    #[tokio::test]
    async fn should_wrap_other_repository_errors() {
        let mut mock_repo = MockGroceryItemRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = RemoveGroceryItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(RemoveGroceryItemParams { id: 1 }).await;

        assert!(matches!(
            result.unwrap_err(),
            GroceryItemError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
