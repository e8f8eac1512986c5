use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        item::{
            ClaimItemDto, CreateItemDto, ItemDto, ItemWithGuestsDto, UnclaimItemDto, UpdateItemDto,
        },
    },
    server::{
        error::AppError,
        model::{
            claim::{ClaimParams, UnclaimParams},
            item::{CreateItemParams, Item, UpdateItemParams},
        },
        service::item::ItemService,
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "items";

fn list(items: Vec<Item>) -> ApiResponse<Vec<ItemDto>> {
    ApiResponse::list(items.into_iter().map(|i| i.into_dto()).collect())
}

/// Get all registry items.
///
/// # Returns
/// - `200 OK` - List of items with their available counts
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/items",
    tag = ITEM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved items", body = ApiResponse<Vec<ItemDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let items = service.get_all().await?;

    Ok((StatusCode::OK, Json(list(items))))
}

/// Get items with at least one unit claimed.
#[utoipa::path(
    get,
    path = "/api/items/claimed",
    tag = ITEM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved claimed items", body = ApiResponse<Vec<ItemDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_claimed_items(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let items = service.get_claimed().await?;

    Ok((StatusCode::OK, Json(list(items))))
}

/// Get items that still have units available.
#[utoipa::path(
    get,
    path = "/api/items/unclaimed",
    tag = ITEM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved unclaimed items", body = ApiResponse<Vec<ItemDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unclaimed_items(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let items = service.get_unclaimed().await?;

    Ok((StatusCode::OK, Json(list(items))))
}

/// Get the items a guest has claimed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `guest_name` - Guest name
/// - `guest_number` - Guest phone number
///
/// # Returns
/// - `200 OK` - Items claimed by the guest, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/items/guest/{guest_name}/{guest_number}",
    tag = ITEM_TAG,
    params(
        ("guest_name" = String, Path, description = "Guest name"),
        ("guest_number" = String, Path, description = "Guest phone number")
    ),
    responses(
        (status = 200, description = "Successfully retrieved items", body = ApiResponse<Vec<ItemDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items_by_guest(
    State(state): State<AppState>,
    Path((guest_name, guest_number)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let items = service.get_by_guest(&guest_name, &guest_number).await?;

    Ok((StatusCode::OK, Json(list(items))))
}

/// Get an item by name.
///
/// # Returns
/// - `200 OK` - The item
/// - `404 Not Found` - No such item
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/items/{item_name}",
    tag = ITEM_TAG,
    params(
        ("item_name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved item", body = ApiResponse<ItemDto>),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service.get(&item_name).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(item.into_dto()))))
}

/// Get an item with every guest who claimed it.
///
/// # Returns
/// - `200 OK` - The item with `claims`
/// - `404 Not Found` - No such item
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/items/{item_name}/guests",
    tag = ITEM_TAG,
    params(
        ("item_name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved item and claims", body = ApiResponse<ItemWithGuestsDto>),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item_guests(
    State(state): State<AppState>,
    Path(item_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service.get_with_claims(&item_name).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(item.into_dto()))))
}

/// Create a registry item.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Item data; name is required, count defaults to 1
///
/// # Returns
/// - `201 Created` - The created item
/// - `400 Bad Request` - Missing name or negative count
/// - `409 Conflict` - Name already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/items",
    tag = ITEM_TAG,
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Successfully created item", body = ApiResponse<ItemDto>),
        (status = 400, description = "Missing name or negative count", body = ErrorDto),
        (status = 409, description = "Item with this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let params = CreateItemParams::from_dto(payload)?;
    let item = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(item.into_dto()).with_message("Item created successfully")),
    ))
}

/// Update an item's link, photo, or count.
///
/// # Returns
/// - `200 OK` - The updated item
/// - `400 Bad Request` - Negative count
/// - `404 Not Found` - No such item
/// - `409 Conflict` - Count would drop below the claimed count
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/items/{item_name}",
    tag = ITEM_TAG,
    params(
        ("item_name" = String, Path, description = "Item name")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Successfully updated item", body = ApiResponse<ItemDto>),
        (status = 400, description = "Negative count", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 409, description = "Count below claimed count", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_name): Path<String>,
    JsonBody(payload): JsonBody<UpdateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let params = UpdateItemParams::from_dto(item_name, payload)?;
    let item = service.update(params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(item.into_dto()).with_message("Item updated successfully")),
    ))
}

/// Claim units of an item for a guest.
///
/// Adds to the guest's existing claim when there is one.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `item_name` - Item to claim
/// - `payload` - Claiming guest and quantity (default 1)
///
/// # Returns
/// - `200 OK` - The item with its updated counter
/// - `400 Bad Request` - Missing guest, invalid quantity, or unknown guest
/// - `404 Not Found` - No such item
/// - `409 Conflict` - Not enough units available
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/items/{item_name}/claim",
    tag = ITEM_TAG,
    params(
        ("item_name" = String, Path, description = "Item name")
    ),
    request_body = ClaimItemDto,
    responses(
        (status = 200, description = "Item claimed successfully", body = ApiResponse<ItemDto>),
        (status = 400, description = "Missing or unknown guest, or invalid quantity", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 409, description = "Not enough units available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn claim_item(
    State(state): State<AppState>,
    Path(item_name): Path<String>,
    JsonBody(payload): JsonBody<ClaimItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let params = ClaimParams::from_item_dto(item_name, payload)?;
    let item = service.claim(params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(item.into_dto()).with_message("Item claimed successfully")),
    ))
}

/// Release a guest's claim on an item.
///
/// # Returns
/// - `200 OK` - The item with its updated counter
/// - `400 Bad Request` - Missing guest
/// - `404 Not Found` - No such claim
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/items/{item_name}/unclaim",
    tag = ITEM_TAG,
    params(
        ("item_name" = String, Path, description = "Item name")
    ),
    request_body = UnclaimItemDto,
    responses(
        (status = 200, description = "Item unclaimed successfully", body = ApiResponse<ItemDto>),
        (status = 400, description = "Missing guest", body = ErrorDto),
        (status = 404, description = "Claim not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unclaim_item(
    State(state): State<AppState>,
    Path(item_name): Path<String>,
    JsonBody(payload): JsonBody<UnclaimItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let guest = UnclaimParams::from_dto(payload)?;
    let item = service
        .unclaim(&item_name, &guest.guest_name, &guest.guest_number)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(item.into_dto()).with_message("Item unclaimed successfully")),
    ))
}

/// Delete an item and all claims on it.
///
/// # Returns
/// - `200 OK` - The deleted item
/// - `404 Not Found` - No such item
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/items/{item_name}",
    tag = ITEM_TAG,
    params(
        ("item_name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Successfully deleted item", body = ApiResponse<ItemDto>),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service.delete(&item_name).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(item.into_dto()).with_message("Item deleted successfully")),
    ))
}
