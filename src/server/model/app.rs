use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{model::auth::AdminCredentials, util::google::GoogleClient};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub google: GoogleClient,
    pub admin: Arc<AdminCredentials>,
}
