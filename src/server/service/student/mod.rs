//! Student record service.
//!
//! Ties the search classifier and the student ID checks to the repository. The web
//! handlers go through [`StudentService::create`] and [`StudentService::update`], which
//! validate before writing; the JSON API uses the unchecked variants.

pub mod search;
pub mod validate;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    server::{
        data::student::StudentRepository,
        error::{student::StudentError, Error},
        model::student::StudentInput,
        service::student::{
            search::{classify, StudentFilter},
            validate::{ensure_unique_student_id, validate_student_id},
        },
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the records matching a raw search box term
    pub async fn search(&self, term: &str) -> Result<Vec<StudentDto>, Error> {
        self.find(classify(term.trim())).await
    }

    /// Lists every record
    pub async fn list(&self) -> Result<Vec<StudentDto>, Error> {
        self.find(StudentFilter::All).await
    }

    async fn find(&self, filter: StudentFilter) -> Result<Vec<StudentDto>, Error> {
        let students = StudentRepository::new(self.db).find(filter).await?;

        Ok(students.into_iter().map(StudentDto::from).collect())
    }

    /// Fetches a record by the store key as it appears in the URL
    ///
    /// # Returns
    /// - `Ok(StudentDto)` - The record
    /// - `Err(Error::StudentError(StudentError::NotFound))` - Unknown or malformed key
    /// - `Err(Error::DbErr)` - Store failure
    pub async fn get(&self, key: &str) -> Result<StudentDto, Error> {
        let id = parse_key(key)?;

        StudentRepository::new(self.db)
            .get(id)
            .await?
            .map(StudentDto::from)
            .ok_or_else(|| StudentError::NotFound(key.to_string()).into())
    }

    /// Validates and inserts a new record
    ///
    /// # Returns
    /// - `Ok(StudentDto)` - The inserted record including its store key
    /// - `Err(Error::StudentError(StudentError::InvalidStudentId))` - Student ID is not 8 digits
    /// - `Err(Error::StudentError(StudentError::DuplicateStudentId))` - Student ID already taken
    /// - `Err(Error::DbErr)` - Store failure
    pub async fn create(&self, input: StudentInput) -> Result<StudentDto, Error> {
        validate_student_id(&input.student_id)?;
        ensure_unique_student_id(self.db, &input.student_id, None).await?;

        self.insert(input).await
    }

    /// Inserts a record without checking the student ID format first
    ///
    /// The unique index still applies, a taken student ID fails with
    /// [`StudentError::DuplicateStudentId`].
    pub async fn create_unchecked(&self, dto: CreateStudentDto) -> Result<StudentDto, Error> {
        self.insert(dto.into()).await
    }

    async fn insert(&self, input: StudentInput) -> Result<StudentDto, Error> {
        let student_id = input.student_id.clone();

        let student = StudentRepository::new(self.db)
            .create(input)
            .await
            .map_err(|err| unique_violation_to_duplicate(err, &student_id))?;

        tracing::info!(key = student.id, student_id = %student.student_id, "Created student");

        Ok(student.into())
    }

    /// Validates and overwrites an existing record
    ///
    /// The record keeps its own student ID without tripping the duplicate check.
    ///
    /// # Returns
    /// - `Ok(StudentDto)` - The updated record
    /// - `Err(Error::StudentError(_))` - Invalid or duplicate student ID, or unknown key
    /// - `Err(Error::DbErr)` - Store failure
    pub async fn update(&self, key: &str, input: StudentInput) -> Result<StudentDto, Error> {
        let id = parse_key(key)?;

        validate_student_id(&input.student_id)?;
        ensure_unique_student_id(self.db, &input.student_id, Some(id)).await?;

        let student_id = input.student_id.clone();
        let student = StudentRepository::new(self.db)
            .update(id, input)
            .await
            .map_err(|err| unique_violation_to_duplicate(err, &student_id))?
            .ok_or_else(|| StudentError::NotFound(key.to_string()))?;

        tracing::info!(key = student.id, student_id = %student.student_id, "Updated student");

        Ok(student.into())
    }

    /// Writes the fields present in `dto` without validating them first
    pub async fn patch(&self, key: &str, dto: UpdateStudentDto) -> Result<StudentDto, Error> {
        let id = parse_key(key)?;
        let student_id = dto.student_id.clone().unwrap_or_default();

        let student = StudentRepository::new(self.db)
            .patch(id, dto)
            .await
            .map_err(|err| unique_violation_to_duplicate(err, &student_id))?
            .ok_or_else(|| StudentError::NotFound(key.to_string()))?;

        tracing::info!(key = student.id, student_id = %student.student_id, "Updated student");

        Ok(student.into())
    }

    /// Deletes a record
    ///
    /// Returns whether a record was removed; an unknown or malformed key is not an error.
    pub async fn delete(&self, key: &str) -> Result<bool, Error> {
        let Ok(id) = parse_key(key) else {
            return Ok(false);
        };

        let result = StudentRepository::new(self.db).delete(id).await?;
        let deleted = result.rows_affected > 0;

        if deleted {
            tracing::info!(key = id, "Deleted student");
        }

        Ok(deleted)
    }
}

/// Parses a store key taken from a URL
///
/// A key that cannot be a store key names no record.
pub fn parse_key(key: &str) -> Result<i32, StudentError> {
    key.parse::<i32>()
        .map_err(|_| StudentError::NotFound(key.to_string()))
}

/// Maps a unique index violation raised by the store to a duplicate student ID
fn unique_violation_to_duplicate(err: DbErr, student_id: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            StudentError::DuplicateStudentId(student_id.to_string()).into()
        }
        _ => err.into(),
    }
}
