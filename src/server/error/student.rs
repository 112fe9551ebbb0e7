use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::MessageDto;

/// Errors raised by student record validation and lookup
///
/// The display text is the notice shown to staff on the web forms.
#[derive(Error, Debug, PartialEq)]
pub enum StudentError {
    /// Student ID is not exactly 8 decimal digits
    #[error("Student ID must be exactly 8 digits!")]
    InvalidStudentId(String),
    /// Another record already holds the student ID
    #[error("Student ID already exists! Please enter another.")]
    DuplicateStudentId(String),
    /// No record exists for the store key
    #[error("Student not found")]
    NotFound(String),
    #[error("Name is required!")]
    MissingName,
    #[error("{field} must be a number!")]
    InvalidField { field: &'static str, value: String },
}

impl StudentError {
    /// Whether the error rejects submitted input, as opposed to a missing record
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}

impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(key) => {
                tracing::debug!(key = %key, "{}", self);
                StatusCode::NOT_FOUND
            }
            Self::DuplicateStudentId(student_id) => {
                tracing::debug!(student_id = %student_id, "{}", self);
                StatusCode::CONFLICT
            }
            Self::InvalidStudentId(_) | Self::MissingName | Self::InvalidField { .. } => {
                tracing::debug!("{}", self);
                StatusCode::BAD_REQUEST
            }
        };

        (status, Json(MessageDto::new(self.to_string()))).into_response()
    }
}
