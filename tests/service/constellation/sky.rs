//! Tests for ConstellationService::sky.

use entity::diary::EmotionPolarity;
use starlog::{
    error::{auth::AuthError, Error},
    service::constellation::ConstellationService,
};
use starlog_test_utils::prelude::*;

/// Tests that the sky requires an authenticated user.
///
/// Expected: Err with AuthError::NotLoggedIn
#[tokio::test]
async fn unauthorized_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;

    let result = ConstellationService::new(&test.state.db)
        .sky(None, ymd(2026, 4, 1))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests that a missing template degrades to an all-origin sky with the
/// built-in sign name.
///
/// 2026-04-01 falls in the Aries season, 2026-03-21 through 2026-04-19.
///
/// Expected: Ok with one star per season day, all at the origin
#[tokio::test]
async fn missing_template_degrades_to_origin_stars() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    let sky = ConstellationService::new(&test.state.db)
        .sky(Some(user.id), ymd(2026, 4, 1))
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    assert_eq!(sky.code, "aries");
    assert_eq!(sky.name_ko, "양자리");
    assert_eq!(sky.season_start, ymd(2026, 3, 21));
    assert_eq!(sky.season_end, ymd(2026, 4, 19));
    assert_eq!(sky.days_count, 30);
    assert_eq!(sky.stars.len(), 30);
    assert!(sky.stars.iter().all(|star| star.x == 0.0 && star.y == 0.0));
    assert_eq!(sky.stars[0].date, ymd(2026, 3, 21));
    assert_eq!(sky.stars[29].date, ymd(2026, 4, 19));

    Ok(())
}

/// Tests that template anchor points are resampled across the season, with
/// the endpoints landing on the first and last day.
///
/// Expected: Ok with stars spanning the template path
#[tokio::test]
async fn resamples_template_path_across_season() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;
    test.star()
        .insert_template(
            "aries",
            "양자리",
            "03-21",
            "04-19",
            serde_json::json!([{"x": 0.0, "y": 0.0}, {"x": 10.0, "y": 0.0}]),
            None,
        )
        .await?;

    let sky = ConstellationService::new(&test.state.db)
        .sky(Some(user.id), ymd(2026, 4, 1))
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    assert_eq!(sky.stars.len(), 30);
    assert_eq!(sky.stars[0].x, 0.0);
    let last = sky.stars.last().unwrap();
    assert!((last.x - 10.0).abs() < 1e-9);

    // Stars advance monotonically along the path
    for pair in sky.stars.windows(2) {
        assert!(pair[0].x <= pair[1].x);
    }

    Ok(())
}

/// Tests that a path index restricts which anchors form the drawn path.
///
/// Expected: Ok with stars spanning only the indexed anchors
#[tokio::test]
async fn honors_path_index() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;
    test.star()
        .insert_template(
            "aries",
            "양자리",
            "03-21",
            "04-19",
            serde_json::json!([
                {"x": 0.0, "y": 0.0},
                {"x": 100.0, "y": 100.0},
                {"x": 4.0, "y": 0.0}
            ]),
            Some(serde_json::json!([0, 2])),
        )
        .await?;

    let sky = ConstellationService::new(&test.state.db)
        .sky(Some(user.id), ymd(2026, 4, 1))
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    // The far-off middle anchor is skipped entirely
    assert!(sky.stars.iter().all(|star| star.x <= 4.0 && star.y == 0.0));

    Ok(())
}

/// Tests that diary entries light up their day's star, with the newest
/// entry's emotion winning for a date written twice.
///
/// Expected: Ok with has_entry, polarity, and intensity mapped per day
#[tokio::test]
async fn maps_entries_onto_days() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;

    test.diary()
        .insert_diary(user.id, ymd(2026, 3, 25), "in season", EmotionPolarity::Positive, Some(4))
        .await?;
    // Outside the Aries season, must not appear
    test.diary()
        .insert_diary(user.id, ymd(2026, 3, 1), "before season", EmotionPolarity::Negative, Some(1))
        .await?;

    let sky = ConstellationService::new(&test.state.db)
        .sky(Some(user.id), ymd(2026, 4, 1))
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    let lit: Vec<_> = sky.stars.iter().filter(|star| star.has_entry).collect();
    assert_eq!(lit.len(), 1);
    assert_eq!(lit[0].date, ymd(2026, 3, 25));
    assert_eq!(lit[0].polarity, Some(EmotionPolarity::Positive));
    assert_eq!(lit[0].intensity, Some(4));

    let dark = sky.stars.iter().find(|star| star.date == ymd(2026, 3, 22)).unwrap();
    assert!(!dark.has_entry);
    assert_eq!(dark.polarity, None);

    Ok(())
}

/// Tests that another user's entries never light the caller's sky.
///
/// Expected: Ok with no lit stars
#[tokio::test]
async fn ignores_other_users_entries() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    let user = test.user().insert_user("sub-1").await?;
    let other = test.user().insert_user("sub-2").await?;

    test.diary()
        .insert_diary(other.id, ymd(2026, 3, 25), "theirs", EmotionPolarity::Positive, Some(5))
        .await?;

    let sky = ConstellationService::new(&test.state.db)
        .sky(Some(user.id), ymd(2026, 4, 1))
        .await
        .map_err(|e| TestError::SetupError(e.to_string()))?;

    assert!(sky.stars.iter().all(|star| !star.has_entry));

    Ok(())
}
