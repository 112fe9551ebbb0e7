use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::MessageDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to login user due to CSRF state missing from session")]
    CsrfMissingValue,
    #[error("Identity provider profile has neither a display name nor an email")]
    ProfileMissingPrincipal,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(MessageDto::new(self.to_string())),
                )
                    .into_response()
            }
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(MessageDto::new(
                        "There was an issue logging you in, please try again.",
                    )),
                )
                    .into_response()
            }
            Self::CsrfMissingValue | Self::ProfileMissingPrincipal => {
                InternalServerError(self).into_response()
            }
        }
    }
}
