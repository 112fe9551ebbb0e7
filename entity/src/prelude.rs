pub use super::student::Entity as Student;
