use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        diary::{
            CreateDiaryDto, DiaryByDateQuery, DiaryDto, DiaryListQuery, DiaryPageDto,
            UpdateDiaryDto,
        },
        session::user::SessionUserId,
    },
    service::diary::DiaryService,
};

pub static DIARY_TAG: &str = "diary";

/// List the caller's diary entries
///
/// Entries are ordered newest entry date first and paginated by an opaque
/// cursor. Malformed optional filters are ignored rather than rejected.
#[utoipa::path(
    get,
    path = "/api/diary",
    tag = DIARY_TAG,
    params(DiaryListQuery),
    responses(
        (status = 200, description = "One page of diary entries", body = DiaryPageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_diaries(
    State(state): State<AppState>,
    session: Session,
    query: Query<DiaryListQuery>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let auth_user_id = SessionUserId::get(&session).await?;

    let page = DiaryService::new(&state.db)
        .query_diaries(auth_user_id, &query.0)
        .await?;

    Ok(Json(page))
}

/// Create a diary entry for the caller
#[utoipa::path(
    post,
    path = "/api/diary",
    tag = DIARY_TAG,
    request_body = CreateDiaryDto,
    responses(
        (status = 200, description = "The created entry", body = DiaryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Conflicting entry", body = ErrorDto),
        (status = 422, description = "Validation error", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_diary(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateDiaryDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let auth_user_id = SessionUserId::get(&session).await?;

    let diary = DiaryService::new(&state.db)
        .create_diary(auth_user_id, dto)
        .await?;

    Ok(Json(diary))
}

/// Update a diary entry owned by the caller
#[utoipa::path(
    put,
    path = "/api/diary",
    tag = DIARY_TAG,
    request_body = UpdateDiaryDto,
    responses(
        (status = 200, description = "The updated entry", body = DiaryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 422, description = "Validation error", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_diary(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<UpdateDiaryDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let auth_user_id = SessionUserId::get(&session).await?;

    let diary = DiaryService::new(&state.db)
        .update_diary(auth_user_id, dto)
        .await?;

    Ok(Json(diary))
}

/// Get the caller's newest entry for an exact date
#[utoipa::path(
    get,
    path = "/api/diary/by-date",
    tag = DIARY_TAG,
    params(DiaryByDateQuery),
    responses(
        (status = 200, description = "The entry for the date, or null", body = Option<DiaryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 422, description = "Invalid date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_diary_by_date(
    State(state): State<AppState>,
    session: Session,
    query: Query<DiaryByDateQuery>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let auth_user_id = SessionUserId::get(&session).await?;

    let diary = DiaryService::new(&state.db)
        .diary_by_date(auth_user_id, &query.0.date)
        .await?;

    Ok(Json(diary))
}
