//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa annotations and
//! collected into one OpenAPI document; Swagger UI serves it at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Starlog", description = "Starlog API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::diary::DIARY_TAG, description = "Diary entry API routes"),
        (name = controller::tag::TAG_TAG, description = "Tag API routes"),
        (name = controller::star::STAR_TAG, description = "Constellation API routes"),
        (name = controller::home::HOME_TAG, description = "Home screen API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::diary::get_diaries,
            controller::diary::create_diary,
            controller::diary::update_diary
        ))
        .routes(routes!(controller::diary::get_diary_by_date))
        .routes(routes!(controller::tag::get_tags))
        .routes(routes!(controller::star::get_star_templates))
        .routes(routes!(controller::star::get_sky))
        .routes(routes!(controller::home::get_home_summary))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
