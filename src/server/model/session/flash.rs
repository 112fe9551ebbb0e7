//! One-shot notice displayed on the next rendered page.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_FLASH_KEY: &str = "registrar:flash";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionFlash(pub String);

impl SessionFlash {
    pub async fn insert(session: &Session, message: &str) -> Result<(), Error> {
        session
            .insert(SESSION_FLASH_KEY, SessionFlash(message.to_string()))
            .await?;

        Ok(())
    }

    /// Returns the pending notice, if any, and clears it
    pub async fn take(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .remove::<SessionFlash>(SESSION_FLASH_KEY)
            .await?
            .map(|SessionFlash(message)| message))
    }
}
