//! Utility types and helpers for server operations.
//!
//! `google` wraps the OAuth2 client used for the identity provider login.

pub mod google;
