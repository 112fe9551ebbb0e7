//! Data access layer repositories.
//!
//! Repositories are the only place that builds queries against the record store.

pub mod student;
