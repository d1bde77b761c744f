use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::category::model::{Category, CategoryItem};
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;

use super::entity::{CategoryEntity, CategoryItemEntity, assemble};

pub struct CategoryRepositoryPostgres {
    pool: PgPool,
}

impl CategoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, CategoryEntity>(
            "SELECT id, name FROM categories ORDER BY position ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let items = sqlx::query_as::<_, CategoryItemEntity>(
            "SELECT id, category_id, name, emoji FROM category_items ORDER BY position ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        assemble(categories, items)
    }

    async fn find_item(&self, id: u64) -> Result<Option<CategoryItem>, RepositoryError> {
        let Ok(id) = i64::try_from(id) else {
            return Ok(None);
        };

        let entity = sqlx::query_as::<_, CategoryItemEntity>(
            "SELECT id, category_id, name, emoji FROM category_items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entity.map(|e| e.into_domain()).transpose()
    }
}
