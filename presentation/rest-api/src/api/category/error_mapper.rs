use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            CategoryError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("repository.persistence")),
            ),
        }
    }
}
