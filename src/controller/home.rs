use axum::{extract::State, response::IntoResponse, Json};
use chrono::Local;
use tower_sessions::Session;

use crate::{
    error::Error,
    model::{api::ErrorDto, app::AppState, session::user::SessionUserId, user::HomeSummaryDto},
    service::user::UserService,
};

pub static HOME_TAG: &str = "home";

/// Home screen summary for the logged-in user
#[utoipa::path(
    get,
    path = "/api/home/summary",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Profile and weekly activity", body = HomeSummaryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_home_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let auth_user_id = SessionUserId::get(&session).await?;

    let summary = UserService::new(&state.db)
        .home_summary(auth_user_id, Local::now().date_naive())
        .await?;

    Ok(Json(summary))
}
