#[derive(Debug, thiserror::Error)]
pub enum GroceryItemError {
    #[error("grocery_item.name_empty")]
    NameEmpty,
    #[error("grocery_item.emoji_empty")]
    EmojiEmpty,
    #[error("grocery_item.invalid_quantity")]
    InvalidQuantity,
    #[error("grocery_item.not_found")]
    NotFound,
    #[error("category_item.not_found")]
    CategoryItemNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
