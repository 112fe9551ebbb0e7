use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    error::Error,
    model::session::{flash::SessionFlash, user::SessionAuth},
};

pub const LOGIN_REQUIRED_NOTICE: &str = "Please log in to continue";

/// Middleware for routes that need a logged in session
///
/// Anonymous requests are redirected to the login page with a notice instead of reaching the
/// handler.
pub async fn require_login(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    let auth = SessionAuth::get(&session).await?;

    if !auth.is_authenticated() {
        tracing::debug!(path = %request.uri().path(), "Redirecting anonymous request to login");

        SessionFlash::insert(&session, LOGIN_REQUIRED_NOTICE).await?;

        return Ok(Redirect::to("/login").into_response());
    }

    Ok(next.run(request).await)
}
