//! JSON API over the student records.
//!
//! These routes are not behind the login gate and write request bodies without the student
//! ID format check the web forms apply. The unique index on the student ID still holds.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    },
    server::{
        error::{student::StudentError, Error},
        model::app::AppState,
        service::student::StudentService,
    },
};

pub static STUDENT_TAG: &str = "student";

/// Get every student record
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All student records", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_students(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let students = StudentService::new(&state.db).list().await?;

    Ok(Json(students))
}

/// Get one student record by its store key
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = String, Path, description = "Store key of the record")),
    responses(
        (status = 200, description = "The student record", body = StudentDto),
        (status = 404, description = "Student not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let student = StudentService::new(&state.db).get(&id).await?;

    Ok(Json(student))
}

/// Create a student record from the request body
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 200, description = "The inserted record with its store key", body = StudentDto),
        (status = 409, description = "Student ID already taken", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(dto): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, Error> {
    let student = StudentService::new(&state.db).create_unchecked(dto).await?;

    Ok(Json(student))
}

/// Update the fields present in the request body
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = String, Path, description = "Store key of the record")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "The updated record", body = StudentDto),
        (status = 404, description = "Student not found", body = MessageDto),
        (status = 409, description = "Student ID already taken", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, Error> {
    let student = StudentService::new(&state.db).patch(&id, dto).await?;

    Ok(Json(student))
}

/// Delete a student record
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = String, Path, description = "Store key of the record")),
    responses(
        (status = 200, description = "Record deleted", body = MessageDto),
        (status = 404, description = "Student not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    if !StudentService::new(&state.db).delete(&id).await? {
        return Err(StudentError::NotFound(id).into());
    }

    Ok(Json(MessageDto::new("Deleted successfully")))
}
