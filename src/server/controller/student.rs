//! Student pages: search/list, add, edit and delete.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::{student::StudentError, Error},
    model::{
        app::AppState,
        session::{flash::SessionFlash, user::SessionAuth},
        student::{StudentForm, StudentInput},
    },
    service::student::StudentService,
    view::{
        render,
        student::{StudentFormPage, StudentListPage},
    },
};

const ADD_HEADING: &str = "Add student";
const EDIT_HEADING: &str = "Edit student";

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub name: String,
}

/// Student list, filtered by the `name` search box
///
/// # Responses
/// - 200 (OK): List page
/// - 500 (Internal Server Error): Store or session failure
pub async fn list_students(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SearchParams>,
) -> Result<Response, Error> {
    let students = StudentService::new(&state.db).search(&params.name).await?;

    let principal = principal(&session).await?;
    let notice = SessionFlash::take(&session).await?;
    let keyword = params.name.trim().to_string();

    Ok(render(rsx! {
        StudentListPage { students, keyword, principal, notice }
    })
    .into_response())
}

/// Empty creation form
pub async fn new_student(session: Session) -> Result<Response, Error> {
    let principal = principal(&session).await?;

    Ok(render(rsx! {
        StudentFormPage {
            heading: ADD_HEADING,
            action: "/add",
            form: StudentForm::default(),
            principal,
            notice: None,
        }
    })
    .into_response())
}

/// Creation form submission
///
/// # Responses
/// - 303 (See Other): Record created, redirect to the list
/// - 422 (Unprocessable Entity): Form shown again with the rejection notice
/// - 500 (Internal Server Error): Store or session failure
pub async fn create_student(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<StudentForm>,
) -> Result<Response, Error> {
    let service = StudentService::new(&state.db);

    let result = match StudentInput::try_from(form.clone()) {
        Ok(input) => service.create(input).await,
        Err(err) => Err(err.into()),
    };

    match result {
        Ok(_) => {
            SessionFlash::insert(&session, "Student added").await?;

            Ok(Redirect::to("/students").into_response())
        }
        Err(Error::StudentError(err)) if err.is_rejection() => {
            rejected_form(&session, ADD_HEADING, "/add".to_string(), form, err).await
        }
        Err(err) => Err(err),
    }
}

/// Edit form pre-filled with the stored record
///
/// # Responses
/// - 200 (OK): Edit form
/// - 303 (See Other): Unknown record, redirect to the list with a notice
/// - 500 (Internal Server Error): Store or session failure
pub async fn edit_student(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Response, Error> {
    let student = match StudentService::new(&state.db).get(&id).await {
        Ok(student) => student,
        Err(Error::StudentError(err @ StudentError::NotFound(_))) => {
            return not_found(&session, err).await
        }
        Err(err) => return Err(err),
    };

    let principal = principal(&session).await?;

    Ok(render(rsx! {
        StudentFormPage {
            heading: EDIT_HEADING,
            action: format!("/edit/{id}"),
            form: StudentForm::from(&student),
            principal,
            notice: None,
        }
    })
    .into_response())
}

/// Edit form submission
///
/// # Responses
/// - 303 (See Other): Record updated, or unknown record; redirect to the list with a notice
/// - 422 (Unprocessable Entity): Form shown again with the rejection notice
/// - 500 (Internal Server Error): Store or session failure
pub async fn update_student(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<StudentForm>,
) -> Result<Response, Error> {
    let service = StudentService::new(&state.db);

    // An unknown record redirects even when the submission itself is invalid
    if let Err(err) = service.get(&id).await {
        return match err {
            Error::StudentError(err @ StudentError::NotFound(_)) => not_found(&session, err).await,
            err => Err(err),
        };
    }

    let result = match StudentInput::try_from(form.clone()) {
        Ok(input) => service.update(&id, input).await,
        Err(err) => Err(err.into()),
    };

    match result {
        Ok(_) => {
            SessionFlash::insert(&session, "Student updated").await?;

            Ok(Redirect::to("/students").into_response())
        }
        Err(Error::StudentError(err @ StudentError::NotFound(_))) => not_found(&session, err).await,
        Err(Error::StudentError(err)) if err.is_rejection() => {
            rejected_form(&session, EDIT_HEADING, format!("/edit/{id}"), form, err).await
        }
        Err(err) => Err(err),
    }
}

/// Deletes a record and returns to the list
///
/// Deleting an unknown record is not an error, the list is shown either way.
pub async fn delete_student(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Response, Error> {
    if StudentService::new(&state.db).delete(&id).await? {
        SessionFlash::insert(&session, "Student deleted").await?;
    }

    Ok(Redirect::to("/students").into_response())
}

async fn principal(session: &Session) -> Result<Option<String>, Error> {
    Ok(SessionAuth::get(session)
        .await?
        .principal()
        .map(str::to_string))
}

async fn rejected_form(
    session: &Session,
    heading: &'static str,
    action: String,
    form: StudentForm,
    err: StudentError,
) -> Result<Response, Error> {
    tracing::debug!(reason = %err, "Rejected student form");

    let principal = principal(session).await?;
    let notice = Some(err.to_string());

    Ok((
        StatusCode::UNPROCESSABLE_ENTITY,
        render(rsx! {
            StudentFormPage { heading, action, form, principal, notice }
        }),
    )
        .into_response())
}

async fn not_found(session: &Session, err: StudentError) -> Result<Response, Error> {
    SessionFlash::insert(session, &err.to_string()).await?;

    Ok(Redirect::to("/students").into_response())
}
