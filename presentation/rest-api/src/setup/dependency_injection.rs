use std::sync::Arc;

use logger::TracingLogger;
use persistence::category::in_memory::CategoryRepositoryInMemory;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::grocery_item::in_memory::GroceryItemRepositoryInMemory;
use persistence::grocery_item::repository::GroceryItemRepositoryPostgres;

use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::grocery_item::add::AddGroceryItemUseCaseImpl;
use business::application::grocery_item::get_all::GetAllGroceryItemsUseCaseImpl;
use business::application::grocery_item::remove::RemoveGroceryItemUseCaseImpl;
use business::application::grocery_item::toggle::ToggleGroceryItemUseCaseImpl;
use business::domain::category::repository::CategoryRepository;
use business::domain::grocery_item::repository::GroceryItemRepository;
use business::domain::logger::Logger;

use crate::config::storage_config::{StorageConfig, init_database};

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub grocery_item_api: crate::api::grocery_item::routes::GroceryItemApi,
    pub category_api: crate::api::category::routes::CategoryApi,
}

impl DependencyContainer {
    pub async fn new(storage: &StorageConfig) -> anyhow::Result<Self> {
        let (grocery_item_repository, category_repository): (
            Arc<dyn GroceryItemRepository>,
            Arc<dyn CategoryRepository>,
        ) = match storage {
            StorageConfig::InMemory => {
                tracing::info!("Using in-memory grocery store");
                (
                    Arc::new(GroceryItemRepositoryInMemory::new()),
                    Arc::new(CategoryRepositoryInMemory::default()),
                )
            }
            StorageConfig::Postgres {
                url,
                max_connections,
                migrations_path,
            } => {
                tracing::info!("Using PostgreSQL grocery store");
                let pool = init_database(url, *max_connections, migrations_path).await?;
                (
                    Arc::new(GroceryItemRepositoryPostgres::new(pool.clone())),
                    Arc::new(CategoryRepositoryPostgres::new(pool)),
                )
            }
        };

        Ok(Self::with_repositories(
            grocery_item_repository,
            category_repository,
            storage.label(),
        ))
    }

    pub fn with_repositories(
        grocery_item_repository: Arc<dyn GroceryItemRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        storage_label: &'static str,
    ) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("grocery_item"));
        let category_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("category"));
        let health_api = crate::api::health::routes::Api::new(storage_label);

        // Grocery item use cases
        let add_use_case = Arc::new(AddGroceryItemUseCaseImpl {
            repository: grocery_item_repository.clone(),
            category_repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllGroceryItemsUseCaseImpl {
            repository: grocery_item_repository.clone(),
            logger: logger.clone(),
        });
        let remove_use_case = Arc::new(RemoveGroceryItemUseCaseImpl {
            repository: grocery_item_repository.clone(),
            logger: logger.clone(),
        });
        let toggle_use_case = Arc::new(ToggleGroceryItemUseCaseImpl {
            repository: grocery_item_repository,
            logger,
        });

        // Category use cases
        let get_all_categories_use_case = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository,
            logger: category_logger,
        });

        let grocery_item_api = crate::api::grocery_item::routes::GroceryItemApi::new(
            add_use_case,
            get_all_use_case,
            remove_use_case,
            toggle_use_case,
        );
        let category_api =
            crate::api::category::routes::CategoryApi::new(get_all_categories_use_case);

        Self {
            health_api,
            grocery_item_api,
            category_api,
        }
    }
}
