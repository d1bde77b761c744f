use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error side of the result envelope: `{"err": "<code>"}`.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Code-style error identifier, e.g. `grocery_item.not_found`
    pub err: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>) -> Self {
        Self { err: code.into() }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Turns body/content-type parse failures into the `{"err": ...}` envelope,
/// so clients never see poem's plain-text rejections.
pub async fn invalid_body<E: std::fmt::Display>(err: E) -> (StatusCode, Json<ErrorResponse>) {
    tracing::warn!("Rejected request body: {err}");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("request.invalid_body")),
    )
}
