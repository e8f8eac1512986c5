use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{CreateUserDto, UpdateUserDto, UserDto, UserWithGuestsDto},
    },
    server::{
        error::AppError,
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// Get all users.
///
/// Returns every user, newest first. Password hashes are never included.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of users with a count
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = ApiResponse<Vec<UserDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_all().await?;
    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::list(users_dto))))
}

/// Get a user by email.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `email` - User's email address
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.get_by_email(&email).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(user.into_dto()))))
}

/// Get a user together with the guests they own.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `email` - User's email address
///
/// # Returns
/// - `200 OK` - The user with a `guests` list of name, number and RSVP flag
/// - `404 Not Found` - No user with that email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{email}/guests",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user and guests", body = ApiResponse<UserWithGuestsDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_guests(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.get_with_guests(&email).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(user.into_dto()))))
}

/// Create a new user.
///
/// The password is hashed before it is stored.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - User data; email, name and password are required
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Missing required field
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = ApiResponse<UserDto>),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 409, description = "User with this email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let params = CreateUserParams::from_dto(payload)?;
    let user = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(user.into_dto()).with_message("User created successfully")),
    ))
}

/// Update a user.
///
/// Absent fields keep their stored value. A new password is re-hashed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `email` - User's email address
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated user
/// - `404 Not Found` - No user with that email
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    put,
    path = "/api/users/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "User email")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    JsonBody(payload): JsonBody<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let params = UpdateUserParams::from_dto(email, payload);
    let user = service.update(params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(user.into_dto()).with_message("User updated successfully")),
    ))
}

/// Delete a user.
///
/// Removes the user's guests and releases every item those guests claimed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `email` - User's email address
///
/// # Returns
/// - `200 OK` - The deleted user
/// - `404 Not Found` - No user with that email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/users/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.delete(&email).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(user.into_dto()).with_message("User deleted successfully")),
    ))
}
