use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every non-2xx response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Success envelope wrapping every 2xx payload.
///
/// `count` is set for list payloads and `message` for mutating actions; both are
/// omitted from the JSON when absent.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(data.len()),
            data,
            message: None,
        }
    }
}

/// Response for `GET /`.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ServiceInfoDto {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointsDto,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct EndpointsDto {
    pub users: String,
    pub guests: String,
    pub items: String,
    pub claims: String,
    pub admin: String,
    pub docs: String,
}

/// Response for `GET /health`.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: String,
    /// Seconds since the server started.
    pub uptime: f64,
    pub environment: String,
}
