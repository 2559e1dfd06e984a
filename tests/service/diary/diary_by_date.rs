//! Tests for DiaryService::diary_by_date.

use chrono::NaiveDateTime;
use entity::diary::EmotionPolarity;
use starlog::{
    error::{auth::AuthError, diary::DiaryError, Error},
    service::diary::DiaryService,
};
use starlog_test_utils::prelude::*;

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Tests that looking up without an authenticated user fails.
///
/// Expected: Err with AuthError::NotLoggedIn
#[tokio::test]
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let result = DiaryService::new(&test.state.db)
        .diary_by_date(None, "2026-08-15")
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests that a malformed date is rejected, unlike the lenient list filters.
///
/// Expected: Err with DiaryError::InvalidDate
#[tokio::test]
async fn rejects_malformed_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    let result = DiaryService::new(&test.state.db)
        .diary_by_date(Some(user.id), "15/08/2026")
        .await;

    assert!(matches!(
        result,
        Err(Error::DiaryError(DiaryError::InvalidDate(_)))
    ));

    Ok(())
}

/// Tests that a date with no entry returns None rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_empty_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    let result = DiaryService::new(&test.state.db)
        .diary_by_date(Some(user.id), "2026-08-15")
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that the newest of several entries on the same date is returned,
/// with its tags loaded.
///
/// Expected: Ok(Some) with the most recently created entry
#[tokio::test]
async fn returns_newest_entry_for_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;
    let happy = test.tag().insert_tag("기쁨", Some(1)).await?;

    test.diary()
        .insert_diary_created_at(
            user.id,
            ymd(2026, 8, 15),
            "morning",
            EmotionPolarity::Unset,
            None,
            ts("2026-08-15 08:00:00"),
        )
        .await?;
    let evening = test
        .diary()
        .insert_diary_created_at(
            user.id,
            ymd(2026, 8, 15),
            "evening",
            EmotionPolarity::Positive,
            Some(4),
            ts("2026-08-15 21:00:00"),
        )
        .await?;
    test.diary().attach_tag(evening.id, happy.id).await?;

    let result = DiaryService::new(&test.state.db)
        .diary_by_date(Some(user.id), "2026-08-15")
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    let diary = result.unwrap();
    assert_eq!(diary.diary_id, evening.id);
    assert_eq!(diary.content, "evening");
    assert_eq!(diary.tags.len(), 1);

    Ok(())
}
