use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::grocery_item::use_cases::add::{AddGroceryItemParams, AddGroceryItemUseCase};
use business::domain::grocery_item::use_cases::get_all::GetAllGroceryItemsUseCase;
use business::domain::grocery_item::use_cases::remove::{
    RemoveGroceryItemParams, RemoveGroceryItemUseCase,
};
use business::domain::grocery_item::use_cases::toggle::{
    ToggleGroceryItemParams, ToggleGroceryItemUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::grocery_item::dto::{
    AckResponse, AddGroceryItemRequest, GroceryItemResponse, ItemIdResponse,
};
use crate::api::tags::ApiTags;

pub struct GroceryItemApi {
    add_use_case: Arc<dyn AddGroceryItemUseCase>,
    get_all_use_case: Arc<dyn GetAllGroceryItemsUseCase>,
    remove_use_case: Arc<dyn RemoveGroceryItemUseCase>,
    toggle_use_case: Arc<dyn ToggleGroceryItemUseCase>,
}

impl GroceryItemApi {
    pub fn new(
        add_use_case: Arc<dyn AddGroceryItemUseCase>,
        get_all_use_case: Arc<dyn GetAllGroceryItemsUseCase>,
        remove_use_case: Arc<dyn RemoveGroceryItemUseCase>,
        toggle_use_case: Arc<dyn ToggleGroceryItemUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            get_all_use_case,
            remove_use_case,
            toggle_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<u64, Json<ErrorResponse>> {
    raw.parse()
        .map_err(|_| Json(ErrorResponse::new("grocery_item.invalid_id")))
}

/// Grocery list API
///
/// Mutating endpoints answer with a result envelope: `{"ok": ...}` or `{"err": "<code>"}`.
#[OpenApi]
impl GroceryItemApi {
    /// List grocery items
    ///
    /// Returns every item in the order it was added.
    #[oai(
        path = "/items",
        method = "get",
        tag = "ApiTags::Items",
        operation_id = "getItems"
    )]
    async fn get_all(&self) -> GetAllGroceryItemsResponse {
        match self.get_all_use_case.execute().await {
            Ok(items) => {
                let responses: Vec<GroceryItemResponse> =
                    items.into_iter().map(|i| i.into()).collect();
                GetAllGroceryItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllGroceryItemsResponse::InternalError(json)
            }
        }
    }

    /// Add a grocery item
    ///
    /// Stores a new, uncompleted item and returns its id. When `category_item_id`
    /// is given, the template's name and emoji are used.
    #[oai(
        path = "/items",
        method = "post",
        tag = "ApiTags::Items",
        operation_id = "addItem"
    )]
    async fn add(&self, body: Json<AddGroceryItemRequest>) -> AddGroceryItemResponse {
        let params = AddGroceryItemParams {
            name: body.0.name,
            emoji: body.0.emoji,
            quantity: body.0.quantity,
            category_item_id: body.0.category_item_id,
        };

        match self.add_use_case.execute(params).await {
            Ok(item) => AddGroceryItemResponse::Created(Json(ItemIdResponse { ok: item.id })),
            Err(err) => {
                tracing::warn!("addItem failed: {err}");
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddGroceryItemResponse::BadRequest(json),
                    404 => AddGroceryItemResponse::NotFound(json),
                    _ => AddGroceryItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a grocery item
    ///
    /// Deletes exactly the item with the given id.
    #[oai(
        path = "/items/:id",
        method = "delete",
        tag = "ApiTags::Items",
        operation_id = "removeItem"
    )]
    async fn remove(&self, id: Path<String>) -> AckItemResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return AckItemResponse::BadRequest(json),
        };

        match self
            .remove_use_case
            .execute(RemoveGroceryItemParams { id })
            .await
        {
            Ok(()) => AckItemResponse::Ok(Json(AckResponse::default())),
            Err(err) => {
                tracing::warn!("removeItem {id} failed: {err}");
                AckItemResponse::from_error(err.into_error_response())
            }
        }
    }

    /// Toggle item completion
    ///
    /// Flips the completed flag of the item with the given id.
    #[oai(
        path = "/items/:id/toggle",
        method = "post",
        tag = "ApiTags::Items",
        operation_id = "toggleItemCompletion"
    )]
    async fn toggle(&self, id: Path<String>) -> AckItemResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return AckItemResponse::BadRequest(json),
        };

        match self
            .toggle_use_case
            .execute(ToggleGroceryItemParams { id })
            .await
        {
            Ok(_) => AckItemResponse::Ok(Json(AckResponse::default())),
            Err(err) => {
                tracing::warn!("toggleItemCompletion {id} failed: {err}");
                AckItemResponse::from_error(err.into_error_response())
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllGroceryItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<GroceryItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddGroceryItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemIdResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Response of the id-addressed mutations (`removeItem`, `toggleItemCompletion`).
#[derive(poem_openapi::ApiResponse)]
pub enum AckItemResponse {
    #[oai(status = 200)]
    Ok(Json<AckResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AckItemResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => AckItemResponse::BadRequest(json),
            404 => AckItemResponse::NotFound(json),
            _ => AckItemResponse::InternalError(json),
        }
    }
}
