//! Session data models and utilities.
//!
//! Type-safe wrappers for the data the server keeps in the tower-sessions session:
//! the authentication state, the OAuth2 CSRF state and the one-shot flash notice.

pub mod auth;
pub mod flash;
pub mod user;
