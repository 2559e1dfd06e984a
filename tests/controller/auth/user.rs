//! Tests for the current-user endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use starlog::{
    controller::auth::get_user,
    model::{app::AppState, session::user::SessionUserId},
};
use starlog_test_utils::prelude::*;

/// Tests fetching the logged-in user's profile.
///
/// Expected: Ok with 200 OK
#[tokio::test]
async fn returns_profile_for_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    SessionUserId::insert(&test.session, user.id)
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    let result = get_user(State(test.app_state::<AppState>()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests that the endpoint rejects anonymous callers.
///
/// Expected: Err with 401 Unauthorized
#[tokio::test]
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let result = get_user(State(test.app_state::<AppState>()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests that a session pointing at a deleted user is cleared and reported
/// as not found.
///
/// Expected: Err with 404 and an emptied session
#[tokio::test]
async fn stale_session_is_cleared() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_deleted_user("sub-1").await?;

    SessionUserId::insert(&test.session, user.id)
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    let result = get_user(State(test.app_state::<AppState>()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let session_user = SessionUserId::get(&test.session)
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;
    assert_eq!(session_user, None);

    Ok(())
}
