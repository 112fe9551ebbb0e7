//! Error types for the registrar server.
//!
//! Each domain has its own `thiserror` enum; [`Error`] aggregates them together with the
//! errors of the libraries the server talks to. Every error converts into an axum response,
//! so handlers can return `Result<_, Error>` and rely on `?`.

pub mod auth;
pub mod config;
pub mod student;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{auth::AuthError, config::ConfigError, student::StudentError},
};

/// Token exchange error returned by the OAuth2 client
pub type OAuth2TokenError =
    oauth2::basic::BasicRequestTokenError<oauth2::HttpClientError<reqwest::Error>>;

/// Main error type for the registrar server.
///
/// Domain errors map to specific HTTP responses; library errors fall back to a logged
/// 500 Internal Server Error.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, CSRF state, identity provider).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Student record error (validation, duplicates, missing records).
    #[error(transparent)]
    StudentError(#[from] StudentError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// OAuth2 authorization code exchange failed.
    #[error(transparent)]
    OAuth2TokenError(#[from] OAuth2TokenError),
    /// Invalid OAuth2 endpoint URL.
    #[error(transparent)]
    UrlParseError(#[from] oauth2::url::ParseError),
    /// HTTP client error while talking to the identity provider.
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// Listener or socket error.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::StudentError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto::new("Internal server error")),
        )
            .into_response()
    }
}
