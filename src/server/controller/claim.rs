use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        claim::{ClaimDto, CreateClaimDto, UpdateClaimDto},
    },
    server::{
        error::AppError,
        model::claim::{parse_quantity, ClaimDetail, ClaimParams},
        service::claim::ClaimService,
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping claim endpoints in OpenAPI documentation
pub static CLAIM_TAG: &str = "claims";

fn list(claims: Vec<ClaimDetail>) -> ApiResponse<Vec<ClaimDto>> {
    ApiResponse::list(claims.into_iter().map(|c| c.into_dto()).collect())
}

/// Get every claim with its item details.
///
/// # Returns
/// - `200 OK` - List of claims, newest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/claims",
    tag = CLAIM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved claims", body = ApiResponse<Vec<ClaimDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_claims(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ClaimService::new(&state.db);

    let claims = service.get_all().await?;

    Ok((StatusCode::OK, Json(list(claims))))
}

/// Get the claims made by a guest.
#[utoipa::path(
    get,
    path = "/api/claims/guest/{guest_name}/{guest_number}",
    tag = CLAIM_TAG,
    params(
        ("guest_name" = String, Path, description = "Guest name"),
        ("guest_number" = String, Path, description = "Guest phone number")
    ),
    responses(
        (status = 200, description = "Successfully retrieved claims", body = ApiResponse<Vec<ClaimDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_claims_by_guest(
    State(state): State<AppState>,
    Path((guest_name, guest_number)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClaimService::new(&state.db);

    let claims = service.get_by_guest(&guest_name, &guest_number).await?;

    Ok((StatusCode::OK, Json(list(claims))))
}

/// Get the claims on an item.
#[utoipa::path(
    get,
    path = "/api/claims/item/{item_name}",
    tag = CLAIM_TAG,
    params(
        ("item_name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved claims", body = ApiResponse<Vec<ClaimDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_claims_by_item(
    State(state): State<AppState>,
    Path(item_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClaimService::new(&state.db);

    let claims = service.get_by_item(&item_name).await?;

    Ok((StatusCode::OK, Json(list(claims))))
}

/// Create a claim.
///
/// Claiming an item the guest already holds adds to the existing quantity.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Guest, item, and quantity (default 1)
///
/// # Returns
/// - `201 Created` - The stored claim
/// - `400 Bad Request` - Missing field, invalid quantity, or unknown guest or item
/// - `409 Conflict` - Not enough units available
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/claims",
    tag = CLAIM_TAG,
    request_body = CreateClaimDto,
    responses(
        (status = 201, description = "Item claimed successfully", body = ApiResponse<ClaimDto>),
        (status = 400, description = "Missing field or unknown guest or item", body = ErrorDto),
        (status = 409, description = "Not enough units available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_claim(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateClaimDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClaimService::new(&state.db);

    let params = ClaimParams::from_dto(payload)?;
    let claim = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(claim.into_dto()).with_message("Item claimed successfully")),
    ))
}

/// Set a claim to a new quantity.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `guest_name`, `guest_number`, `item_name` - Claim key
/// - `payload` - New quantity, at least 1
///
/// # Returns
/// - `200 OK` - The updated claim
/// - `400 Bad Request` - Invalid quantity
/// - `404 Not Found` - No such claim
/// - `409 Conflict` - Increase exceeds the units available
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/claims/{guest_name}/{guest_number}/{item_name}",
    tag = CLAIM_TAG,
    params(
        ("guest_name" = String, Path, description = "Guest name"),
        ("guest_number" = String, Path, description = "Guest phone number"),
        ("item_name" = String, Path, description = "Item name")
    ),
    request_body = UpdateClaimDto,
    responses(
        (status = 200, description = "Claim quantity updated successfully", body = ApiResponse<ClaimDto>),
        (status = 400, description = "Valid quantity is required", body = ErrorDto),
        (status = 404, description = "Claim not found", body = ErrorDto),
        (status = 409, description = "Not enough units available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_claim(
    State(state): State<AppState>,
    Path((guest_name, guest_number, item_name)): Path<(String, String, String)>,
    JsonBody(payload): JsonBody<UpdateClaimDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClaimService::new(&state.db);

    let quantity = parse_quantity(payload.quantity)?;
    let claim = service
        .update(&guest_name, &guest_number, &item_name, quantity)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::data(claim.into_dto()).with_message("Claim quantity updated successfully"),
        ),
    ))
}

/// Delete a single claim and release its units.
///
/// # Returns
/// - `200 OK` - The removed claim
/// - `404 Not Found` - No such claim
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/claims/{guest_name}/{guest_number}/{item_name}",
    tag = CLAIM_TAG,
    params(
        ("guest_name" = String, Path, description = "Guest name"),
        ("guest_number" = String, Path, description = "Guest phone number"),
        ("item_name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Item unclaimed successfully", body = ApiResponse<ClaimDto>),
        (status = 404, description = "Claim not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_claim(
    State(state): State<AppState>,
    Path((guest_name, guest_number, item_name)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClaimService::new(&state.db);

    let claim = service
        .delete(&guest_name, &guest_number, &item_name)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(claim.into_dto()).with_message("Item unclaimed successfully")),
    ))
}

/// Delete every claim a guest made.
///
/// # Returns
/// - `200 OK` - The removed claims, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/claims/guest/{guest_name}/{guest_number}",
    tag = CLAIM_TAG,
    params(
        ("guest_name" = String, Path, description = "Guest name"),
        ("guest_number" = String, Path, description = "Guest phone number")
    ),
    responses(
        (status = 200, description = "Successfully deleted claims", body = ApiResponse<Vec<ClaimDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_claims_by_guest(
    State(state): State<AppState>,
    Path((guest_name, guest_number)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClaimService::new(&state.db);

    let claims = service.delete_by_guest(&guest_name, &guest_number).await?;
    let message = format!("Deleted {} claim(s) for guest", claims.len());

    Ok((StatusCode::OK, Json(list(claims).with_message(message))))
}

/// Delete every claim on an item.
///
/// # Returns
/// - `200 OK` - The removed claims, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/claims/item/{item_name}",
    tag = CLAIM_TAG,
    params(
        ("item_name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Successfully deleted claims", body = ApiResponse<Vec<ClaimDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_claims_by_item(
    State(state): State<AppState>,
    Path(item_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClaimService::new(&state.db);

    let claims = service.delete_by_item(&item_name).await?;
    let message = format!("Deleted {} claim(s) for item", claims.len());

    Ok((StatusCode::OK, Json(list(claims).with_message(message))))
}
