//! Fixtures for database records and mock HTTP endpoints.
//!
//! - `google` - Google OAuth2 token and userinfo endpoints
//! - `student` - student records

pub mod google;
pub mod student;
