use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{api::ErrorDto, app::AppState, tag::TagDto},
    service::tag::TagService,
};

pub static TAG_TAG: &str = "tag";

/// List all active tags in display order
#[utoipa::path(
    get,
    path = "/api/tag",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "Active tags", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let tags = TagService::new(&state.db).get_active_tags().await?;

    Ok(Json(tags))
}
