//! In-memory student models for tests that don't touch the database.

/// Create a student model with every field populated
pub fn mock_student_model(id: i32, student_id: &str, name: &str) -> entity::student::Model {
    entity::student::Model {
        id,
        student_id: student_id.to_string(),
        name: name.to_string(),
        age: Some(20),
        major: Some("Physics".to_string()),
        gpa: Some(3.5),
    }
}
