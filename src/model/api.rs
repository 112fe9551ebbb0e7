use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message body returned by the JSON API for errors and bodiless successes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Human readable message
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
