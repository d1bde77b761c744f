use chrono::{DateTime, Utc};

use super::errors::GroceryItemError;

/// Quantity assigned when the caller does not provide one.
pub const DEFAULT_QUANTITY: u32 = 1;
/// Largest quantity accepted for a single item. Fits every backing store.
pub const MAX_QUANTITY: u32 = 9_999;

#[derive(Debug, Clone, PartialEq)]
pub struct GroceryItem {
    pub id: u64,
    pub name: String,
    pub emoji: String,
    pub completed: bool,
    pub quantity: u32,
    /// Category template the item was created from, if any.
    pub category_item_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}

/// A validated item that has not been given an id by the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGroceryItem {
    pub name: String,
    pub emoji: String,
    pub quantity: u32,
    pub category_item_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl NewGroceryItem {
    pub fn new(
        name: String,
        emoji: String,
        quantity: Option<u32>,
        category_item_id: Option<u64>,
    ) -> Result<Self, GroceryItemError> {
        if name.trim().is_empty() {
            return Err(GroceryItemError::NameEmpty);
        }
        if emoji.trim().is_empty() {
            return Err(GroceryItemError::EmojiEmpty);
        }
        let quantity = match quantity {
            Some(q) if q == 0 || q > MAX_QUANTITY => {
                return Err(GroceryItemError::InvalidQuantity);
            }
            Some(q) => q,
            None => DEFAULT_QUANTITY,
        };

        Ok(Self {
            name,
            emoji,
            quantity,
            category_item_id,
            created_at: Utc::now(),
        })
    }

    /// Attaches the id assigned by the store. New items always start uncompleted.
    pub fn with_id(self, id: u64) -> GroceryItem {
        GroceryItem {
            id,
            name: self.name,
            emoji: self.emoji,
            completed: false,
            quantity: self.quantity,
            category_item_id: self.category_item_id,
            created_at: self.created_at,
        }
    }
}

impl GroceryItem {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: u64,
        name: String,
        emoji: String,
        completed: bool,
        quantity: u32,
        category_item_id: Option<u64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            emoji,
            completed,
            quantity,
            category_item_id,
            created_at,
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            completed: !self.completed,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_item_when_name_and_emoji_valid() {
        let result = NewGroceryItem::new("Milk".to_string(), "🥛".to_string(), None, None);

        assert!(result.is_ok());
        let item = result.unwrap();
        assert_eq!(item.name, "Milk");
        assert_eq!(item.emoji, "🥛");
        assert!(item.category_item_id.is_none());
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = NewGroceryItem::new("".to_string(), "🥛".to_string(), None, None);

        assert!(matches!(result.unwrap_err(), GroceryItemError::NameEmpty));
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let result = NewGroceryItem::new("   ".to_string(), "🥛".to_string(), None, None);

        assert!(matches!(result.unwrap_err(), GroceryItemError::NameEmpty));
    }

    #[test]
    fn should_reject_when_emoji_empty() {
        let result = NewGroceryItem::new("Milk".to_string(), " ".to_string(), None, None);

        assert!(matches!(result.unwrap_err(), GroceryItemError::EmojiEmpty));
    }

    #[test]
    fn should_default_quantity_to_one() {
        let item = NewGroceryItem::new("Eggs".to_string(), "🥚".to_string(), None, None).unwrap();

        assert_eq!(item.quantity, DEFAULT_QUANTITY);
    }

    #[test]
    fn should_keep_given_quantity() {
        let item =
            NewGroceryItem::new("Eggs".to_string(), "🥚".to_string(), Some(12), None).unwrap();

        assert_eq!(item.quantity, 12);
    }

    #[test]
    fn should_reject_zero_quantity() {
        let result = NewGroceryItem::new("Eggs".to_string(), "🥚".to_string(), Some(0), None);

        assert!(matches!(
            result.unwrap_err(),
            GroceryItemError::InvalidQuantity
        ));
    }

    #[test]
    fn should_accept_max_quantity() {
        let item =
            NewGroceryItem::new("Eggs".to_string(), "🥚".to_string(), Some(MAX_QUANTITY), None)
                .unwrap();

        assert_eq!(item.quantity, MAX_QUANTITY);
    }

    #[test]
    fn should_reject_quantity_above_max() {
        let result = NewGroceryItem::new(
            "Eggs".to_string(),
            "🥚".to_string(),
            Some(3_000_000_000),
            None,
        );

        assert!(matches!(
            result.unwrap_err(),
            GroceryItemError::InvalidQuantity
        ));
    }

    #[test]
    fn should_start_uncompleted_once_stored() {
        let item = NewGroceryItem::new("Milk".to_string(), "🥛".to_string(), None, Some(7))
            .unwrap()
            .with_id(1);

        assert_eq!(item.id, 1);
        assert!(!item.completed);
        assert_eq!(item.category_item_id, Some(7));
    }

    #[test]
    fn should_flip_completed_when_toggled() {
        let item = NewGroceryItem::new("Milk".to_string(), "🥛".to_string(), None, None)
            .unwrap()
            .with_id(1);

        let toggled = item.clone().toggled();
        assert!(toggled.completed);
        assert!(!toggled.toggled().completed);
        assert_eq!(item.name, "Milk");
    }
}
