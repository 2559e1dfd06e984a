use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable machine-readable error categories carried by every error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    AuthUnauthorized,
    AuthForbidden,
    ValidationError,
    NotFound,
    Conflict,
    RateLimited,
    DbError,
    InternalError,
}

/// The response body when an API request fails.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub code: ErrorCode,
    /// Human-readable description safe to show to the client.
    pub message: String,
    /// Random per-request trace id, also attached to the server-side log
    /// line for the failure.
    pub request_id: String,
}
