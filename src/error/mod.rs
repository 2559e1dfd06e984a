//! Error types for the Starlog server.
//!
//! Domain-specific errors live in their own enums and are aggregated into a
//! single [`Error`] via `thiserror`'s `#[from]`. Every error response body is
//! an [`ErrorDto`] carrying a stable code, a client-safe message, and a
//! random request id that is also attached to the server-side log line.

pub mod auth;
pub mod config;
pub mod diary;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, diary::DiaryError},
    model::api::{ErrorCode, ErrorDto},
};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, OAuth exchange).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Diary domain error (validation, ownership, missing rows).
    #[error(transparent)]
    DiaryError(#[from] DiaryError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Starlog's code.
    #[error("Internal error with Starlog's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// OAuth endpoint URL construction error.
    #[error(transparent)]
    OAuthUrlError(#[from] oauth2::url::ParseError),
    /// HTTP client error (userinfo request).
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// JSON (de)serialization error.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Filesystem error (template import file).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Random trace id attached to every error response and its log line.
pub fn make_request_id() -> String {
    format!("req_{:016x}", rand::random::<u64>())
}

/// Build the standard error response body.
pub fn error_response(status: StatusCode, code: ErrorCode, message: &str) -> Response {
    (
        status,
        Json(ErrorDto {
            code,
            message: message.to_string(),
            request_id: make_request_id(),
        }),
    )
        .into_response()
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::DiaryError(err) => err.into_response(),
            Self::DbErr(err) => db_error_response(err),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Translates database errors at the response boundary: unique constraint
/// violations become conflicts, everything else is a store error.
fn db_error_response(err: sea_orm::DbErr) -> Response {
    if let Some(SqlErr::UniqueConstraintViolation(constraint)) = err.sql_err() {
        let request_id = make_request_id();
        tracing::debug!(request_id, constraint, "unique constraint violation");

        return (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                code: ErrorCode::Conflict,
                message: "Resource already exists".to_string(),
                request_id,
            }),
        )
            .into_response();
    }

    let request_id = make_request_id();
    tracing::error!(request_id, "database error: {err}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto {
            code: ErrorCode::DbError,
            message: "Store error".to_string(),
            request_id,
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic message
/// to the client to avoid exposing internal details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let request_id = make_request_id();
        tracing::error!(request_id, "{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                code: ErrorCode::InternalError,
                message: "Internal server error".to_string(),
                request_id,
            }),
        )
            .into_response()
    }
}
