//! HTTP routing and OpenAPI documentation.
//!
//! Pages are plain axum routes; the JSON API is registered through utoipa so its OpenAPI
//! document is served with Swagger UI at `/api/docs`.

use axum::{middleware, response::Redirect, routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, util::gate::require_login},
    model::app::AppState,
};

/// Builds the application router
///
/// # Pages
/// - `GET /` - Redirect to the student list
/// - `GET /students` - Student list and search, open to anonymous visitors
/// - `GET|POST /add`, `GET|POST /edit/{id}`, `GET /delete/{id}` - Require a logged in session
/// - `GET|POST /login`, `GET /logout` - Local login and logout
/// - `GET /auth/google`, `GET /auth/google/callback` - Google login
///
/// # JSON API
/// `/api/students` and `/api/students/{id}`, documented at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Registrar", description = "Student records API"), tags(
        (name = controller::api::STUDENT_TAG, description = "Student record routes"),
    ))]
    struct ApiDoc;

    let (api_routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::api::list_students,
            controller::api::create_student
        ))
        .routes(routes!(
            controller::api::get_student,
            controller::api::update_student,
            controller::api::delete_student
        ))
        .split_for_parts();

    let protected = Router::new()
        .route(
            "/add",
            get(controller::student::new_student).post(controller::student::create_student),
        )
        .route(
            "/edit/{id}",
            get(controller::student::edit_student).post(controller::student::update_student),
        )
        .route("/delete/{id}", get(controller::student::delete_student))
        .route_layer(middleware::from_fn(require_login));

    Router::new()
        .route("/", get(|| async { Redirect::to("/students") }))
        .route("/students", get(controller::student::list_students))
        .route(
            "/login",
            get(controller::auth::login_page).post(controller::auth::login),
        )
        .route("/logout", get(controller::auth::logout))
        .route("/auth/google", get(controller::auth::google_login))
        .route(
            "/auth/google/callback",
            get(controller::auth::google_callback),
        )
        .merge(protected)
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
