pub mod auth;
pub mod student;
