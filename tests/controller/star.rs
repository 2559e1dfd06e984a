//! Tests for the constellation endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use starlog::{
    controller::star::{get_sky, get_star_templates},
    model::{app::AppState, session::user::SessionUserId, star::SkyQuery},
};
use starlog_test_utils::prelude::*;

/// Tests that the template catalogue is public.
///
/// Expected: Ok with 200 OK
#[tokio::test]
async fn template_catalogue_is_public() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let result = get_star_templates(State(test.app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests rendering the sky for an explicit date.
///
/// Expected: Ok with 200 OK
#[tokio::test]
async fn sky_succeeds_for_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    SessionUserId::insert(&test.session, user.id)
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    let result = get_sky(
        State(test.app_state::<AppState>()),
        test.session.clone(),
        Query(SkyQuery {
            date: Some("2026-04-01".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests that the sky rejects anonymous callers.
///
/// Expected: Err with 401 Unauthorized
#[tokio::test]
async fn sky_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let result = get_sky(
        State(test.app_state::<AppState>()),
        test.session.clone(),
        Query(SkyQuery::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests that a malformed explicit date is rejected.
///
/// Expected: Err with 422 Unprocessable Entity
#[tokio::test]
async fn sky_rejects_malformed_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    SessionUserId::insert(&test.session, user.id)
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    let result = get_sky(
        State(test.app_state::<AppState>()),
        test.session.clone(),
        Query(SkyQuery {
            date: Some("not-a-date".to_string()),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
