use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    error::{error_response, InternalServerError},
    model::api::ErrorCode,
};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    NotLoggedIn,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to login user due to CSRF state present in session store but without a value")]
    CsrfMissingValue,
    #[error("Failed to exchange authorization code for an access token: {0}")]
    TokenExchangeFailed(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn => {
                tracing::debug!("{}", Self::NotLoggedIn);

                error_response(
                    StatusCode::UNAUTHORIZED,
                    ErrorCode::AuthUnauthorized,
                    "Login required",
                )
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                error_response(
                    StatusCode::NOT_FOUND,
                    ErrorCode::NotFound,
                    "User not found",
                )
            }
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", Self::CsrfValidationFailed);

                error_response(
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    "There was an issue logging you in, please try again.",
                )
            }
            Self::CsrfMissingValue => InternalServerError(self).into_response(),
            Self::TokenExchangeFailed(_) => InternalServerError(self).into_response(),
        }
    }
}
