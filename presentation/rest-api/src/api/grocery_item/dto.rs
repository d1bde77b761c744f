use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::grocery_item::model::GroceryItem;

#[derive(Debug, Clone, Object)]
pub struct AddGroceryItemRequest {
    /// Item name (cannot be empty)
    pub name: String,
    /// Emoji shown next to the item (cannot be empty)
    pub emoji: String,
    /// How many to buy, 1 to 9999 (default: 1)
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
    /// Category template to copy name and emoji from
    #[oai(skip_serializing_if_is_none)]
    pub category_item_id: Option<u64>,
}

#[derive(Debug, Clone, Object)]
pub struct GroceryItemResponse {
    /// Item identifier, assigned by the store
    pub id: u64,
    /// Item name
    pub name: String,
    /// Item emoji
    pub emoji: String,
    /// Whether the item has been picked up
    pub completed: bool,
    /// How many to buy
    pub quantity: u32,
    /// Category template the item was created from
    #[oai(skip_serializing_if_is_none)]
    pub category_item_id: Option<u64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<GroceryItem> for GroceryItemResponse {
    fn from(item: GroceryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            emoji: item.emoji,
            completed: item.completed,
            quantity: item.quantity,
            category_item_id: item.category_item_id,
            created_at: item.created_at,
        }
    }
}

/// Ok side of the result envelope for `addItem`: `{"ok": <id>}`.
#[derive(Debug, Clone, Object)]
pub struct ItemIdResponse {
    pub ok: u64,
}

/// Ok side of the result envelope for calls without a payload: `{"ok": null}`.
#[derive(Debug, Clone, Default, Object)]
pub struct AckResponse {
    pub ok: serde_json::Value,
}
