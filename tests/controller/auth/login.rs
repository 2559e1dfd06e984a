//! Tests for the login endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use starlog::{
    controller::auth::login,
    model::{app::AppState, session::auth::SessionAuthCsrf},
};
use starlog_test_utils::prelude::*;

/// Tests that login redirects to the provider's authorize URL and stores a
/// CSRF state in the session.
///
/// Expected: Ok with 307 redirect carrying the stored state
#[tokio::test]
async fn redirects_to_provider_with_csrf_state() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(State(test.app_state::<AppState>()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let stored_state = SessionAuthCsrf::get(&test.session)
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;
    assert!(!stored_state.is_empty());

    let location = resp
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(location.contains("/oauth/authorize"));
    assert!(location.contains(&format!("state={stored_state}")));

    Ok(())
}

/// Tests that each login attempt generates a fresh CSRF state.
///
/// Expected: Ok with a different state after the second call
#[tokio::test]
async fn regenerates_state_per_attempt() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.app_state::<AppState>();

    login(State(state.clone()), test.session.clone())
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;
    let first = SessionAuthCsrf::get(&test.session)
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    login(State(state), test.session.clone())
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;
    let second = SessionAuthCsrf::get(&test.session)
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    assert_ne!(first, second);

    Ok(())
}
