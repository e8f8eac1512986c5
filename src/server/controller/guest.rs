use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        guest::{CreateGuestDto, GuestDto, GuestWithItemsDto, UpdateGuestDto},
    },
    server::{
        error::AppError,
        model::guest::{CreateGuestParams, UpdateGuestParams},
        service::guest::GuestService,
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping guest endpoints in OpenAPI documentation
pub static GUEST_TAG: &str = "guests";

/// Get all guests.
///
/// # Returns
/// - `200 OK` - List of guests, newest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guests",
    tag = GUEST_TAG,
    responses(
        (status = 200, description = "Successfully retrieved guests", body = ApiResponse<Vec<GuestDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guests(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = GuestService::new(&state.db);

    let guests = service.get_all().await?;
    let guests_dto: Vec<GuestDto> = guests.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::list(guests_dto))))
}

/// Get the guests owned by a user.
///
/// An unknown email yields an empty list rather than 404.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_email` - Owner's email address
///
/// # Returns
/// - `200 OK` - List of guests owned by the user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guests/user/{user_email}",
    tag = GUEST_TAG,
    params(
        ("user_email" = String, Path, description = "Owner's email")
    ),
    responses(
        (status = 200, description = "Successfully retrieved guests", body = ApiResponse<Vec<GuestDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guests_by_user(
    State(state): State<AppState>,
    Path(user_email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuestService::new(&state.db);

    let guests = service.get_by_user(&user_email).await?;
    let guests_dto: Vec<GuestDto> = guests.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::list(guests_dto))))
}

/// Get a guest by name and number.
///
/// # Returns
/// - `200 OK` - The guest
/// - `404 Not Found` - No such guest
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guests/{name}/{number}",
    tag = GUEST_TAG,
    params(
        ("name" = String, Path, description = "Guest name"),
        ("number" = String, Path, description = "Guest phone number")
    ),
    responses(
        (status = 200, description = "Successfully retrieved guest", body = ApiResponse<GuestDto>),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guest(
    State(state): State<AppState>,
    Path((name, number)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuestService::new(&state.db);

    let guest = service.get(&name, &number).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(guest.into_dto()))))
}

/// Get a guest with the items they have claimed.
///
/// # Returns
/// - `200 OK` - The guest with `claimed_items`
/// - `404 Not Found` - No such guest
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guests/{name}/{number}/items",
    tag = GUEST_TAG,
    params(
        ("name" = String, Path, description = "Guest name"),
        ("number" = String, Path, description = "Guest phone number")
    ),
    responses(
        (status = 200, description = "Successfully retrieved guest and items", body = ApiResponse<GuestWithItemsDto>),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guest_items(
    State(state): State<AppState>,
    Path((name, number)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuestService::new(&state.db);

    let guest = service.get_with_items(&name, &number).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(guest.into_dto()))))
}

/// Create a new guest.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Guest data; name and number are required, `going` defaults to true
///
/// # Returns
/// - `201 Created` - The created guest
/// - `400 Bad Request` - Missing field or unknown owner email
/// - `409 Conflict` - Name and number already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/guests",
    tag = GUEST_TAG,
    request_body = CreateGuestDto,
    responses(
        (status = 201, description = "Successfully created guest", body = ApiResponse<GuestDto>),
        (status = 400, description = "Missing field or unknown owner email", body = ErrorDto),
        (status = 409, description = "Guest with this name and number already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_guest(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateGuestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuestService::new(&state.db);

    let params = CreateGuestParams::from_dto(payload)?;
    let guest = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(guest.into_dto()).with_message("Guest created successfully")),
    ))
}

/// Update a guest's owner or RSVP flag.
///
/// # Returns
/// - `200 OK` - The updated guest
/// - `400 Bad Request` - Unknown owner email
/// - `404 Not Found` - No such guest
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/guests/{name}/{number}",
    tag = GUEST_TAG,
    params(
        ("name" = String, Path, description = "Guest name"),
        ("number" = String, Path, description = "Guest phone number")
    ),
    request_body = UpdateGuestDto,
    responses(
        (status = 200, description = "Successfully updated guest", body = ApiResponse<GuestDto>),
        (status = 400, description = "User email does not exist", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_guest(
    State(state): State<AppState>,
    Path((name, number)): Path<(String, String)>,
    JsonBody(payload): JsonBody<UpdateGuestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuestService::new(&state.db);

    let params = UpdateGuestParams::from_dto(name, number, payload);
    let guest = service.update(params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(guest.into_dto()).with_message("Guest updated successfully")),
    ))
}

/// Delete a guest and release everything they claimed.
///
/// # Returns
/// - `200 OK` - The deleted guest
/// - `404 Not Found` - No such guest
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/guests/{name}/{number}",
    tag = GUEST_TAG,
    params(
        ("name" = String, Path, description = "Guest name"),
        ("number" = String, Path, description = "Guest phone number")
    ),
    responses(
        (status = 200, description = "Successfully deleted guest", body = ApiResponse<GuestDto>),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_guest(
    State(state): State<AppState>,
    Path((name, number)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuestService::new(&state.db);

    let guest = service.delete(&name, &number).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(guest.into_dto()).with_message("Guest deleted successfully")),
    ))
}
