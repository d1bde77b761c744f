use poem_openapi::Object;

use business::domain::category::model::{Category, CategoryItem};

#[derive(Debug, Clone, Object)]
pub struct CategoryItemResponse {
    /// Template identifier, usable as `category_item_id` when adding an item
    pub id: u64,
    pub name: String,
    pub emoji: String,
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    /// Category name
    pub name: String,
    /// Suggested items, in display order
    pub items: Vec<CategoryItemResponse>,
}

impl From<CategoryItem> for CategoryItemResponse {
    fn from(item: CategoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            emoji: item.emoji,
        }
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            name: category.name,
            items: category.items.into_iter().map(Into::into).collect(),
        }
    }
}
