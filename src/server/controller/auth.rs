//! Login and logout: the static staff credential and Google OAuth2.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    controller::util::csrf::validate_csrf,
    error::{auth::AuthError, Error},
    model::{
        app::AppState,
        session::{
            auth::SessionAuthCsrf,
            flash::SessionFlash,
            user::{AuthState, SessionAuth},
        },
    },
    service::auth::{
        callback::callback_service,
        login::{local_login_service, login_service},
    },
    view::{login::LoginPage, render},
};

pub const GOOGLE_LOGIN_FAILED_NOTICE: &str = "Google login failed, please try again.";

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: Option<String>,
    pub error: Option<String>,
}

/// Login page with the local form and the Google link
pub async fn login_page(session: Session) -> Result<Response, Error> {
    let notice = SessionFlash::take(&session).await?;

    Ok(render(rsx! {
        LoginPage { username: "", notice }
    })
    .into_response())
}

/// Local login form submission
///
/// # Responses
/// - 303 (See Other): Logged in, redirect to the student list
/// - 401 (Unauthorized): Login page shown again with a notice
/// - 500 (Internal Server Error): Session failure
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, Error> {
    match local_login_service(&state.admin, &form.username, &form.password) {
        Ok(auth) => {
            start_session(&session, auth).await?;

            Ok(Redirect::to("/students").into_response())
        }
        Err(Error::AuthError(err @ AuthError::InvalidCredentials)) => {
            tracing::warn!(username = %form.username, "Rejected local login");

            let notice = Some(err.to_string());

            Ok((
                StatusCode::UNAUTHORIZED,
                render(rsx! {
                    LoginPage { username: form.username, notice }
                }),
            )
                .into_response())
        }
        Err(err) => Err(err),
    }
}

/// Starts a Google login
///
/// # Responses
/// - 307 (Temporary Redirect): Redirect to Google's consent page
/// - 500 (Internal Server Error): Session failure
pub async fn google_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let login = login_service(&state.google);

    SessionAuthCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback Google redirects back to after the consent page
///
/// # Responses
/// - 303 (See Other): Logged in, redirect to the student list; or the login was declined,
///   redirect to the login page with a notice
/// - 400 (Bad Request): CSRF state does not match the one stored in the session
/// - 500 (Internal Server Error): No login pending, code exchange or profile fetch failed
pub async fn google_callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<Response, Error> {
    validate_csrf(&session, &params.state).await?;

    let code = match (params.code, params.error) {
        (Some(code), None) => code,
        (_, error) => {
            tracing::warn!(error = ?error, "Google login did not return an authorization code");

            SessionFlash::insert(&session, GOOGLE_LOGIN_FAILED_NOTICE).await?;

            return Ok(Redirect::to("/login").into_response());
        }
    };

    let auth = callback_service(&state.google, &code).await?;
    start_session(&session, auth).await?;

    Ok(Redirect::to("/students").into_response())
}

/// Logs out by clearing the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session that was never stored is a store error
    if SessionAuth::get(&session).await?.is_authenticated() {
        session.clear().await;
    }

    Ok(Redirect::to("/login"))
}

async fn start_session(session: &Session, auth: AuthState) -> Result<(), Error> {
    session.cycle_id().await?;

    if let Some(principal) = auth.principal() {
        tracing::info!(principal = %principal, "User logged in");
    }

    SessionAuth::insert(session, auth).await
}
