use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::api::{EndpointsDto, HealthDto, ServiceInfoDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static SYSTEM_TAG: &str = "system";

/// Describe the service and its resource endpoints.
#[utoipa::path(
    get,
    path = "/",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Service information", body = ServiceInfoDto)
    ),
)]
pub async fn root() -> impl IntoResponse {
    Json(ServiceInfoDto {
        message: "Gift Registry & RSVP API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointsDto {
            users: "/api/users".to_string(),
            guests: "/api/guests".to_string(),
            items: "/api/items".to_string(),
            claims: "/api/claims".to_string(),
            admin: "/api/admin".to_string(),
            docs: "/api/docs".to_string(),
        },
    })
}

/// Report liveness, uptime and environment.
#[utoipa::path(
    get,
    path = "/health",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthDto {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        environment: state.environment.clone(),
    })
}

/// Fallback for unmatched routes.
pub async fn not_found() -> Result<StatusCode, AppError> {
    Err(AppError::NotFound("Route not found".to_string()))
}
