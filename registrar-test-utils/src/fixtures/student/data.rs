use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, fixtures::student::StudentFixtures};

impl<'a> StudentFixtures<'a> {
    /// Insert a student with no optional fields set
    pub async fn insert_student(
        &self,
        student_id: &str,
        name: &str,
    ) -> Result<entity::student::Model, TestError> {
        self.insert(student_id, name, None).await
    }

    /// Insert a student with a major
    pub async fn insert_student_with_major(
        &self,
        student_id: &str,
        name: &str,
        major: &str,
    ) -> Result<entity::student::Model, TestError> {
        self.insert(student_id, name, Some(major.to_string())).await
    }

    async fn insert(
        &self,
        student_id: &str,
        name: &str,
        major: Option<String>,
    ) -> Result<entity::student::Model, TestError> {
        let student = entity::student::ActiveModel {
            student_id: ActiveValue::Set(student_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            age: ActiveValue::Set(None),
            major: ActiveValue::Set(major),
            gpa: ActiveValue::Set(None),
            ..Default::default()
        };

        Ok(student.insert(&self.setup.db).await?)
    }
}
