use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{error::error_response, model::api::ErrorCode};

#[derive(Error, Debug)]
pub enum DiaryError {
    #[error("Emotion intensity {0} is outside the allowed 1..=5 range")]
    InvalidIntensity(i16),
    #[error("Diary content must not be empty")]
    EmptyContent,
    #[error("Invalid date value: {0:?}")]
    InvalidDate(String),
    #[error("Diary entry {0} not found")]
    NotFound(i32),
}

impl IntoResponse for DiaryError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidIntensity(intensity) => {
                tracing::debug!(intensity, "{}", self);

                error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorCode::ValidationError,
                    "Emotion intensity must be between 1 and 5",
                )
            }
            Self::EmptyContent => {
                tracing::debug!("{}", Self::EmptyContent);

                error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorCode::ValidationError,
                    "Diary content must not be empty",
                )
            }
            Self::InvalidDate(ref date) => {
                tracing::debug!(date, "{}", self);

                error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorCode::ValidationError,
                    "Invalid date value",
                )
            }
            Self::NotFound(diary_id) => {
                tracing::debug!(diary_id, "{}", self);

                error_response(
                    StatusCode::NOT_FOUND,
                    ErrorCode::NotFound,
                    "Diary entry not found",
                )
            }
        }
    }
}
