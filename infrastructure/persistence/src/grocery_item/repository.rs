use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::grocery_item::model::{GroceryItem, NewGroceryItem};
use business::domain::grocery_item::repository::GroceryItemRepository;

use super::entity::GroceryItemEntity;

const COLUMNS: &str = "id, name, emoji, completed, quantity, category_item_id, created_at";

pub struct GroceryItemRepositoryPostgres {
    pool: PgPool,
}

impl GroceryItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Ids outside the BIGINT range can never have been issued by the sequence.
fn to_db_id(id: u64) -> Result<i64, RepositoryError> {
    i64::try_from(id).map_err(|_| RepositoryError::NotFound)
}

#[async_trait]
impl GroceryItemRepository for GroceryItemRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<GroceryItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, GroceryItemEntity>(&format!(
            "SELECT {COLUMNS} FROM grocery_items ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn insert(&self, item: NewGroceryItem) -> Result<GroceryItem, RepositoryError> {
        let quantity = i32::try_from(item.quantity).map_err(|_| RepositoryError::Persistence)?;
        let category_item_id = item
            .category_item_id
            .map(i64::try_from)
            .transpose()
            .map_err(|_| RepositoryError::Persistence)?;

        let entity = sqlx::query_as::<_, GroceryItemEntity>(&format!(
            r#"INSERT INTO grocery_items (name, emoji, completed, quantity, category_item_id, created_at)
            VALUES ($1, $2, FALSE, $3, $4, $5)
            RETURNING {COLUMNS}"#
        ))
        .bind(&item.name)
        .bind(&item.emoji)
        .bind(quantity)
        .bind(category_item_id)
        .bind(item.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entity.into_domain()
    }

    async fn toggle_completed(&self, id: u64) -> Result<GroceryItem, RepositoryError> {
        let entity = sqlx::query_as::<_, GroceryItemEntity>(&format!(
            "UPDATE grocery_items SET completed = NOT completed WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(to_db_id(id)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn delete(&self, id: u64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM grocery_items WHERE id = $1")
            .bind(to_db_id(id)?)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
