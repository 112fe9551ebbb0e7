//! Declarative test builder.
//!
//! Tables, student records and mock endpoints are queued on the builder and created in order
//! during the final `build()` call.

use mockito::Mock;
use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    include_student_table: bool,

    // (student_id, name)
    students: Vec<(String, String)>,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    // (name, email) returned by the userinfo endpoint
    google_profiles: Vec<(Option<String>, Option<String>)>,
    google_token_endpoint: bool,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            include_student_table: false,
            students: Vec::new(),
            mock_builders: Vec::new(),
            google_profiles: Vec::new(),
            google_token_endpoint: false,
        }
    }

    /// Add the student table to the test database
    pub fn with_student_table(mut self) -> Self {
        self.include_student_table = true;
        self
    }

    /// Insert a student record during `build()`.
    ///
    /// Implies [`with_student_table`](Self::with_student_table).
    pub fn with_student(mut self, student_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.include_student_table = true;
        self.students.push((student_id.into(), name.into()));
        self
    }

    /// Add the Google token and userinfo endpoints to the mock server.
    ///
    /// The userinfo endpoint returns a profile carrying the provided name and email. Both
    /// endpoints expect exactly one request.
    pub fn with_google_endpoints(mut self, name: Option<&str>, email: Option<&str>) -> Self {
        self.google_profiles
            .push((name.map(str::to_string), email.map(str::to_string)));
        self
    }

    /// Add only the Google token endpoint, leaving userinfo unmocked
    pub fn with_google_token_endpoint(mut self) -> Self {
        self.google_token_endpoint = true;
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Creates the student table first, then inserts student fixtures, then registers mock
    /// endpoints.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        if self.include_student_table {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            setup
                .with_tables(vec![schema.create_table_from_entity(entity::prelude::Student)])
                .await?;
        }

        for (student_id, name) in self.students {
            setup.student().insert_student(&student_id, &name).await?;
        }

        for (name, email) in self.google_profiles {
            let mocks = setup
                .google_endpoints()
                .create_google_endpoints(name.as_deref(), email.as_deref());
            setup.mocks.extend(mocks);
        }

        if self.google_token_endpoint {
            let mock = setup.google_endpoints().create_token_endpoint();
            setup.mocks.push(mock);
        }

        for builder in self.mock_builders {
            let mock = builder(&mut setup.server);
            setup.mocks.push(mock);
        }

        Ok(setup)
    }
}
