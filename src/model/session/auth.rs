//! CSRF state storage for the OAuth login flow.
//!
//! The state token is generated during login initiation, stored in the
//! session, and validated and consumed during the provider callback.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::{auth::AuthError, Error};

pub const SESSION_AUTH_CSRF_KEY: &str = "starlog:auth:csrf";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Fetch the CSRF state without consuming it. Errors when no state is
    /// stored, which indicates an expired or foreign session.
    pub async fn get(session: &Session) -> Result<String, Error> {
        match session.get(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(csrf)) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }

    /// Remove and return the CSRF state so it can only be used once.
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session.remove(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(csrf)) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
