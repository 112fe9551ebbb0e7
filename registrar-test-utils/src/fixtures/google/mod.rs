//! Google OAuth2 mock endpoint fixtures.

pub mod mockito;

use crate::TestContext;

pub struct GoogleFixtures<'a> {
    pub(crate) setup: &'a mut TestContext,
}

impl TestContext {
    /// Access Google mock endpoint fixtures
    pub fn google_endpoints(&mut self) -> GoogleFixtures<'_> {
        GoogleFixtures { setup: self }
    }
}
