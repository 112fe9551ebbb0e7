//! Database model type aliases.

/// Type alias for the student database model.
///
/// # Fields (from `entity::student::Model`)
/// - `id` - Primary key, the store key used in URLs
/// - `student_id` - 8 digit student identifier (unique)
/// - `name` - Display name
/// - `age` - Age (nullable)
/// - `major` - Major (nullable)
/// - `gpa` - Grade point average (nullable)
pub type StudentModel = entity::student::Model;
