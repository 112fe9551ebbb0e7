//! `SeaORM` entities for the registrar database.

pub mod prelude;

pub mod student;
