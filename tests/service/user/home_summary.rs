//! Tests for UserService::home_summary.
//!
//! The weekly count starts at the most recent Monday at midnight, measured
//! on creation time; today's flag is measured on the entry date.

use chrono::NaiveDateTime;
use entity::diary::EmotionPolarity;
use starlog::{
    error::{auth::AuthError, Error},
    service::user::UserService,
};
use starlog_test_utils::prelude::*;

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Tests that the summary requires an authenticated user.
///
/// Expected: Err with AuthError::NotLoggedIn
#[tokio::test]
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let result = UserService::new(&test.state.db)
        .home_summary(None, ymd(2026, 8, 30))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests that a session pointing at a missing user is reported.
///
/// Expected: Err with AuthError::UserNotInDatabase
#[tokio::test]
async fn missing_user_is_reported() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let result = UserService::new(&test.state.db)
        .home_summary(Some(99), ymd(2026, 8, 30))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::UserNotInDatabase(99)))
    ));

    Ok(())
}

/// Tests that a soft-deleted user reads as missing.
///
/// Expected: Err with AuthError::UserNotInDatabase
#[tokio::test]
async fn soft_deleted_user_is_reported() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_deleted_user("sub-1").await?;

    let result = UserService::new(&test.state.db)
        .home_summary(Some(user.id), ymd(2026, 8, 30))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}

/// Tests the weekly window: entries created from Monday 00:00 count,
/// anything earlier does not.
///
/// 2026-08-30 is a Sunday, so the window opens on Monday 2026-08-24.
///
/// Expected: Ok with diary_count 2 and has_entry_today false
#[tokio::test]
async fn counts_entries_since_monday() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    test.diary()
        .insert_diary_created_at(
            user.id,
            ymd(2026, 8, 24),
            "monday midnight",
            EmotionPolarity::Unset,
            None,
            ts("2026-08-24 00:00:00"),
        )
        .await?;
    test.diary()
        .insert_diary_created_at(
            user.id,
            ymd(2026, 8, 27),
            "midweek",
            EmotionPolarity::Unset,
            None,
            ts("2026-08-27 13:00:00"),
        )
        .await?;
    test.diary()
        .insert_diary_created_at(
            user.id,
            ymd(2026, 8, 23),
            "last sunday",
            EmotionPolarity::Unset,
            None,
            ts("2026-08-23 23:59:59"),
        )
        .await?;

    let summary = UserService::new(&test.state.db)
        .home_summary(Some(user.id), ymd(2026, 8, 30))
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    assert_eq!(summary.diary_count, 2);
    assert!(!summary.has_entry_today);
    assert_eq!(summary.profile.nickname, Some("nick-sub-1".to_string()));
    assert_eq!(summary.profile.email, Some("sub-1@example.com".to_string()));

    Ok(())
}

/// Tests that an entry dated today flips the flag even if it was written
/// before the weekly window.
///
/// Expected: Ok with has_entry_today true
#[tokio::test]
async fn flags_entry_for_today() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    test.diary()
        .insert_diary(user.id, ymd(2026, 8, 30), "today", EmotionPolarity::Positive, Some(3))
        .await?;

    let summary = UserService::new(&test.state.db)
        .home_summary(Some(user.id), ymd(2026, 8, 30))
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    assert!(summary.has_entry_today);

    Ok(())
}
