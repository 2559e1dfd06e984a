//! Status-level tests for the diary endpoints. Behavior details are covered
//! by the service tests.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::diary::EmotionPolarity;
use starlog::{
    controller::diary::{create_diary, get_diaries, get_diary_by_date, update_diary},
    model::{
        app::AppState,
        diary::{CreateDiaryDto, DiaryByDateQuery, DiaryListQuery, UpdateDiaryDto},
        session::user::SessionUserId,
    },
};
use starlog_test_utils::prelude::*;

/// Tests listing entries with a logged-in session.
///
/// Expected: Ok with 200 OK
#[tokio::test]
async fn list_succeeds_for_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    SessionUserId::insert(&test.session, user.id)
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    let result = get_diaries(
        State(test.app_state::<AppState>()),
        test.session.clone(),
        Query(DiaryListQuery::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests that listing rejects anonymous callers.
///
/// Expected: Err with 401 Unauthorized
#[tokio::test]
async fn list_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let result = get_diaries(
        State(test.app_state::<AppState>()),
        test.session.clone(),
        Query(DiaryListQuery::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests creating an entry through the endpoint.
///
/// Expected: Ok with 200 OK
#[tokio::test]
async fn create_succeeds_for_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    SessionUserId::insert(&test.session, user.id)
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    let result = create_diary(
        State(test.app_state::<AppState>()),
        test.session.clone(),
        Json(CreateDiaryDto {
            entry_date: ymd(2026, 8, 15),
            content: "wrote from the endpoint".to_string(),
            emotion_polarity: EmotionPolarity::Positive,
            emotion_intensity: Some(3),
            tag_ids: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests that validation failures surface as 422.
///
/// Expected: Err with 422 Unprocessable Entity
#[tokio::test]
async fn create_rejects_blank_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    SessionUserId::insert(&test.session, user.id)
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    let result = create_diary(
        State(test.app_state::<AppState>()),
        test.session.clone(),
        Json(CreateDiaryDto {
            entry_date: ymd(2026, 8, 15),
            content: "  ".to_string(),
            emotion_polarity: EmotionPolarity::Unset,
            emotion_intensity: None,
            tag_ids: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Tests that updating a nonexistent entry surfaces as 404.
///
/// Expected: Err with 404 Not Found
#[tokio::test]
async fn update_missing_entry_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    SessionUserId::insert(&test.session, user.id)
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    let result = update_diary(
        State(test.app_state::<AppState>()),
        test.session.clone(),
        Json(UpdateDiaryDto {
            diary_id: 424242,
            content: "changed".to_string(),
            emotion_polarity: EmotionPolarity::Unset,
            emotion_intensity: None,
            tag_ids: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests the by-date endpoint with a malformed date.
///
/// Expected: Err with 422 Unprocessable Entity
#[tokio::test]
async fn by_date_rejects_malformed_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    SessionUserId::insert(&test.session, user.id)
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    let result = get_diary_by_date(
        State(test.app_state::<AppState>()),
        test.session.clone(),
        Query(DiaryByDateQuery {
            date: "August 15".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
