//! Tests for the tag catalogue endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use starlog::{controller::tag::get_tags, model::app::AppState};
use starlog_test_utils::prelude::*;

/// Tests that the catalogue is public: no session required.
///
/// Expected: Ok with 200 OK
#[tokio::test]
async fn catalogue_is_public() -> Result<(), TestError> {
    let test = TestBuilder::new().with_app_tables().build().await?;
    test.tag().insert_tag("기쁨", Some(1)).await?;

    let result = get_tags(State(test.app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
