//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Holds an in-memory SQLite database, an in-memory session and a mock HTTP server standing
//! in for the Google OAuth2 endpoints.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{
    constant::{TEST_GOOGLE_CALLBACK_URL, TEST_GOOGLE_CLIENT_ID, TEST_GOOGLE_CLIENT_SECRET},
    error::TestError,
};

/// Google OAuth2 settings pointing at the mock server
///
/// Kept as plain strings so this crate does not depend on the server crate; tests build the
/// real client from these values.
#[derive(Clone, Debug)]
pub struct GoogleTestSettings {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by an in-memory store
    pub session: Session,
    /// Google endpoints served by the mock server
    pub google: GoogleTestSettings,

    pub(crate) server: ServerGuard,
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let url = server.url();

        let google = GoogleTestSettings {
            client_id: TEST_GOOGLE_CLIENT_ID.to_string(),
            client_secret: TEST_GOOGLE_CLIENT_SECRET.to_string(),
            callback_url: TEST_GOOGLE_CALLBACK_URL.to_string(),
            auth_url: format!("{}/auth", url),
            token_url: format!("{}/token", url),
            userinfo_url: format!("{}/userinfo", url),
        };

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db,
            session,
            google,
            server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
