use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::grocery_item::errors::GroceryItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for GroceryItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            GroceryItemError::NameEmpty
            | GroceryItemError::EmojiEmpty
            | GroceryItemError::InvalidQuantity => StatusCode::BAD_REQUEST,
            GroceryItemError::NotFound | GroceryItemError::CategoryItemNotFound => {
                StatusCode::NOT_FOUND
            }
            GroceryItemError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string())))
    }
}
