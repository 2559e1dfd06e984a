use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::Local;
use tower_sessions::Session;

use crate::{
    error::{diary::DiaryError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        session::user::SessionUserId,
        star::{SkyDto, SkyQuery, StarTemplateDto},
    },
    service::{constellation::ConstellationService, star::StarService},
    util::time::parse_entry_date,
};

pub static STAR_TAG: &str = "star";

/// List all constellation templates
#[utoipa::path(
    get,
    path = "/api/star",
    tag = STAR_TAG,
    responses(
        (status = 200, description = "Constellation templates", body = Vec<StarTemplateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_star_templates(State(state): State<AppState>) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let templates = StarService::new(&state.db).get_templates().await?;

    Ok(Json(templates))
}

/// Render the caller's sky for the current zodiac season
///
/// One star per season day, positioned along the sign's constellation path
/// and annotated with the caller's diary entry for that day when one exists.
#[utoipa::path(
    get,
    path = "/api/star/sky",
    tag = STAR_TAG,
    params(SkyQuery),
    responses(
        (status = 200, description = "The season's sky", body = SkyDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 422, description = "Invalid date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sky(
    State(state): State<AppState>,
    session: Session,
    query: Query<SkyQuery>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let auth_user_id = SessionUserId::get(&session).await?;

    let date = match query.0.date {
        Some(ref date) => {
            parse_entry_date(date).ok_or_else(|| DiaryError::InvalidDate(date.clone()))?
        }
        None => Local::now().date_naive(),
    };

    let sky = ConstellationService::new(&state.db)
        .sky(auth_user_id, date)
        .await?;

    Ok(Json(sky))
}
