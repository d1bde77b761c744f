use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::grocery_item::model::GroceryItem;

#[derive(Debug, FromRow)]
pub struct GroceryItemEntity {
    pub id: i64,
    pub name: String,
    pub emoji: String,
    pub completed: bool,
    pub quantity: i32,
    pub category_item_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl GroceryItemEntity {
    pub fn into_domain(self) -> Result<GroceryItem, RepositoryError> {
        let id = u64::try_from(self.id).map_err(|_| RepositoryError::DatabaseError)?;
        let quantity = u32::try_from(self.quantity).map_err(|_| RepositoryError::DatabaseError)?;
        let category_item_id = self
            .category_item_id
            .map(u64::try_from)
            .transpose()
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(GroceryItem::from_repository(
            id,
            self.name,
            self.emoji,
            self.completed,
            quantity,
            category_item_id,
            self.created_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> GroceryItemEntity {
        GroceryItemEntity {
            id: 7,
            name: "Milk".to_string(),
            emoji: "🥛".to_string(),
            completed: true,
            quantity: 2,
            category_item_id: Some(201),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn should_map_row_into_domain() {
        let item = entity().into_domain().unwrap();

        assert_eq!(item.id, 7);
        assert_eq!(item.quantity, 2);
        assert!(item.completed);
        assert_eq!(item.category_item_id, Some(201));
    }

    #[test]
    fn should_reject_negative_quantity() {
        let row = GroceryItemEntity {
            quantity: -1,
            ..entity()
        };

        assert!(matches!(
            row.into_domain(),
            Err(RepositoryError::DatabaseError)
        ));
    }
}
