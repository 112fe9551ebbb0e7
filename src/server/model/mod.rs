//! Server application models and type definitions.
//!
//! Application state, database model aliases, session data wrappers, authentication
//! values and validated student input.

pub mod app;
pub mod auth;
pub mod db;
pub mod session;
pub mod student;
