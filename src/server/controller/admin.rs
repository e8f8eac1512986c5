use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::{DatabaseStatusDto, MigrationStatusDto, TableSchemaDto},
        api::{ApiResponse, ErrorDto},
    },
    server::{error::AppError, service::admin::AdminService, state::AppState},
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Check database connectivity.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Backend, server time and version
/// - `500 Internal Server Error` - Database unreachable
#[utoipa::path(
    get,
    path = "/api/admin/check-database",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Database is connected", body = ApiResponse<DatabaseStatusDto>),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn check_database(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = AdminService::new(&state.db);

    let status = service.status().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(status.into_dto()).with_message("Database is connected")),
    ))
}

/// Describe the columns of the users table.
#[utoipa::path(
    get,
    path = "/api/admin/user-schema",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Successfully retrieved schema", body = ApiResponse<TableSchemaDto>),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_schema(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdminService::new(&state.db);

    let schema = service.user_schema().await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(schema.into_dto()))))
}

/// Describe the columns of a registry table.
///
/// Only `users`, `guests`, `items` and `guest_items` can be inspected.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `table` - Table name
///
/// # Returns
/// - `200 OK` - Column names, types and nullability
/// - `404 Not Found` - Unknown table
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/schema/{table}",
    tag = ADMIN_TAG,
    params(
        ("table" = String, Path, description = "Table name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved schema", body = ApiResponse<TableSchemaDto>),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_table_schema(
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdminService::new(&state.db);

    let schema = service.schema(&table).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(schema.into_dto()))))
}

/// List applied and pending migrations.
#[utoipa::path(
    get,
    path = "/api/admin/migrations",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Successfully retrieved migration status", body = ApiResponse<MigrationStatusDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_migrations(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = AdminService::new(&state.db);

    let status = service.migration_status().await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(status.into_dto()))))
}

/// Run pending migrations.
///
/// # Returns
/// - `200 OK` - Migration status after the run
/// - `500 Internal Server Error` - A migration failed
#[utoipa::path(
    post,
    path = "/api/admin/migrations",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Migration completed successfully", body = ApiResponse<MigrationStatusDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn run_migrations(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = AdminService::new(&state.db);

    let status = service.run_migrations().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::data(status.into_dto()).with_message("Migration completed successfully")),
    ))
}
