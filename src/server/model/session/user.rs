//! Authentication state of the browser session.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_AUTH_STATE_KEY: &str = "registrar:user:auth";

/// Who, if anyone, the session is logged in as
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum AuthState {
    #[default]
    Anonymous,
    /// Logged in with the static staff credential
    LocalAuthenticated { username: String },
    /// Logged in through the identity provider
    FederatedAuthenticated { display_name: String },
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    /// Name shown in the page header for a logged in session
    pub fn principal(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::LocalAuthenticated { username } => Some(username),
            Self::FederatedAuthenticated { display_name } => Some(display_name),
        }
    }
}

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuth(pub AuthState);

impl SessionAuth {
    /// Stores the authentication state in the session
    pub async fn insert(session: &Session, state: AuthState) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_STATE_KEY, SessionAuth(state))
            .await?;

        Ok(())
    }

    /// Reads the authentication state, [`AuthState::Anonymous`] when nothing is stored
    pub async fn get(session: &Session) -> Result<AuthState, Error> {
        Ok(session
            .get::<SessionAuth>(SESSION_AUTH_STATE_KEY)
            .await?
            .map(|SessionAuth(state)| state)
            .unwrap_or_default())
    }
}
