use thiserror::Error;

/// Error type covering everything that can go wrong while assembling a test
/// environment.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error(transparent)]
    UrlError(#[from] oauth2::url::ParseError),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error("Test setup error: {0}")]
    SetupError(String),
}
