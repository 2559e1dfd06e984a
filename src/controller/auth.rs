use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    controller::util::{csrf::validate_csrf, get_user::get_user_from_session},
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        session::{auth::SessionAuthCsrf, user::SessionUserId},
        user::UserDto,
    },
    service::auth::{callback::CallbackService, login::login_service},
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Initiate login with the OAuth provider
///
/// Generates a CSRF state, stores it in the session, and redirects the user
/// to the provider's authorize URL.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the OAuth provider's authorize URL"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let login = login_service(&state.oauth);

    SessionAuthCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback route the provider redirects to after login
///
/// Validates and consumes the CSRF state, exchanges the authorization code
/// for a token, resolves the local user from the provider's userinfo, and
/// stores the user id in the session.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Successful login, redirect to the home screen"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    validate_csrf(&session, &params.0.state).await?;

    let user_id = CallbackService::new(&state)
        .handle_callback(&params.0.code)
        .await?;

    SessionUserId::insert(&session, user_id).await?;

    Ok(Redirect::temporary("/home"))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Successfully logged out, redirect to sign-in"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear session if there is actually a user in session
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/sign-in"))
}

/// Get the currently logged-in user's profile
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user profile", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok(Json(user))
}
