//! Student record fixtures.

pub mod data;
pub mod factory;

use crate::TestContext;

pub struct StudentFixtures<'a> {
    pub(crate) setup: &'a TestContext,
}

impl TestContext {
    /// Access student record fixtures
    pub fn student(&self) -> StudentFixtures<'_> {
        StudentFixtures { setup: self }
    }
}
