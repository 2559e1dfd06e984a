//! Tests for the home summary endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use starlog::{
    controller::home::get_home_summary,
    model::{app::AppState, session::user::SessionUserId},
};
use starlog_test_utils::prelude::*;

/// Tests the summary for a logged-in user.
///
/// Expected: Ok with 200 OK
#[tokio::test]
async fn succeeds_for_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    SessionUserId::insert(&test.session, user.id)
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    let result = get_home_summary(State(test.app_state::<AppState>()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests that the summary rejects anonymous callers.
///
/// Expected: Err with 401 Unauthorized
#[tokio::test]
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let result =
        get_home_summary(State(test.app_state::<AppState>()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
