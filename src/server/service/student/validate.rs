//! Student ID format and uniqueness checks performed before every web form write.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::student::StudentRepository,
    error::{student::StudentError, Error},
    service::student::search::STUDENT_ID_LEN,
};

/// Checks that `student_id` is exactly 8 ASCII digits
pub fn validate_student_id(student_id: &str) -> Result<(), StudentError> {
    if student_id.len() == STUDENT_ID_LEN && student_id.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(StudentError::InvalidStudentId(student_id.to_string()))
    }
}

/// Checks that no record other than `exclude` holds `student_id`
///
/// This is a read before the write, two concurrent submissions can both pass it. The unique
/// index on the student table catches the loser.
pub async fn ensure_unique_student_id<C: ConnectionTrait>(
    db: &C,
    student_id: &str,
    exclude: Option<i32>,
) -> Result<(), Error> {
    let repo = StudentRepository::new(db);

    match repo.find_by_student_id(student_id, exclude).await? {
        Some(_) => Err(StudentError::DuplicateStudentId(student_id.to_string()).into()),
        None => Ok(()),
    }
}
