use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Form,
};
use registrar::server::{
    controller::student::{
        create_student, delete_student, edit_student, list_students, new_student,
        update_student, SearchParams,
    },
    model::{session::flash::SessionFlash, student::StudentForm},
};
use registrar_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::{
    util::{body_string, location},
    TestContextExt,
};

fn form(student_id: &str, name: &str) -> StudentForm {
    StudentForm {
        student_id: student_id.to_string(),
        name: name.to_string(),
        age: "21".to_string(),
        major: "Physics".to_string(),
        gpa: "3.8".to_string(),
    }
}

fn search(name: &str) -> Query<SearchParams> {
    Query(SearchParams {
        name: name.to_string(),
    })
}

mod list_students {
    use super::*;

    /// Expect every record when the search box is empty
    #[tokio::test]
    async fn lists_all_without_keyword() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_student("10000001", "Ada")
            .with_student("10000002", "Grace")
            .build()
            .await?;

        let resp = list_students(State(test.app_state()), test.session.clone(), search(""))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains("Ada"));
        assert!(body.contains("Grace"));

        Ok(())
    }

    /// Expect only the exact student ID match for an 8 digit keyword
    #[tokio::test]
    async fn filters_by_exact_student_id() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_student("10000001", "Ada")
            .with_student("10000002", "Grace")
            .build()
            .await?;

        let resp = list_students(
            State(test.app_state()),
            test.session.clone(),
            search(" 10000002 "),
        )
        .await
        .unwrap();

        let body = body_string(resp).await;
        assert!(body.contains("Grace"));
        assert!(!body.contains("Ada"));
        assert!(body.contains(r#"value="10000002""#));

        Ok(())
    }

    /// Expect no results for a partial numeric keyword
    #[tokio::test]
    async fn partial_digits_match_nothing() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_student("10000001", "Ada")
            .build()
            .await?;

        let resp = list_students(State(test.app_state()), test.session.clone(), search("1000"))
            .await
            .unwrap();

        let body = body_string(resp).await;
        assert!(body.contains("No students found."));
        assert!(!body.contains("10000001"));

        Ok(())
    }

    /// Expect the pending flash notice to be shown once
    #[tokio::test]
    async fn shows_flash_once() -> Result<(), TestError> {
        let test = TestBuilder::new().with_student_table().build().await?;
        SessionFlash::insert(&test.session, "Student added")
            .await
            .unwrap();

        let resp = list_students(State(test.app_state()), test.session.clone(), search(""))
            .await
            .unwrap();
        let body = body_string(resp).await;
        assert!(body.contains("Student added"));

        let resp = list_students(State(test.app_state()), test.session.clone(), search(""))
            .await
            .unwrap();
        let body = body_string(resp).await;
        assert!(!body.contains("Student added"));

        Ok(())
    }
}

mod new_student {
    use super::*;

    /// Expect an empty form posting to /add
    #[tokio::test]
    async fn renders_empty_form() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let resp = new_student(test.session.clone()).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains(r#"action="/add""#));

        Ok(())
    }
}

mod create_student {
    use super::*;

    /// Expect the record to be stored and a redirect to the list
    #[tokio::test]
    async fn creates_and_redirects() -> Result<(), TestError> {
        let test = TestBuilder::new().with_student_table().build().await?;

        let resp = create_student(
            State(test.app_state()),
            test.session.clone(),
            Form(form("12345678", "Ada")),
        )
        .await
        .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/students");
        assert_eq!(
            SessionFlash::take(&test.session).await.unwrap(),
            Some("Student added".to_string())
        );

        let students = entity::prelude::Student::find().all(&test.db).await?;
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].student_id, "12345678");
        assert_eq!(students[0].age, Some(21));
        assert_eq!(students[0].gpa, Some(3.8));

        Ok(())
    }

    /// Expect a malformed student ID to re-render the form without writing
    #[tokio::test]
    async fn rejects_malformed_student_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_student_table().build().await?;

        let resp = create_student(
            State(test.app_state()),
            test.session.clone(),
            Form(form("1234567", "Ada")),
        )
        .await
        .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(resp).await;
        assert!(body.contains("Student ID must be exactly 8 digits!"));
        assert!(body.contains(r#"value="1234567""#));

        let count = entity::prelude::Student::find().count(&test.db).await?;
        assert_eq!(count, 0);

        Ok(())
    }

    /// Expect a taken student ID to re-render the form without writing
    #[tokio::test]
    async fn rejects_duplicate_student_id() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_student("12345678", "Ada")
            .build()
            .await?;

        let resp = create_student(
            State(test.app_state()),
            test.session.clone(),
            Form(form("12345678", "Grace")),
        )
        .await
        .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(resp).await;
        assert!(body.contains("Student ID already exists! Please enter another."));

        let count = entity::prelude::Student::find().count(&test.db).await?;
        assert_eq!(count, 1);

        Ok(())
    }

    /// Expect a non-numeric age to be reported on the form
    #[tokio::test]
    async fn rejects_non_numeric_age() -> Result<(), TestError> {
        let test = TestBuilder::new().with_student_table().build().await?;
        let mut submitted = form("12345678", "Ada");
        submitted.age = "twenty".to_string();

        let resp = create_student(State(test.app_state()), test.session.clone(), Form(submitted))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(resp).await;
        assert!(body.contains("must be a number!"));

        Ok(())
    }
}

mod edit_student {
    use super::*;

    /// Expect the form to be pre-filled with the stored record
    #[tokio::test]
    async fn renders_stored_values() -> Result<(), TestError> {
        let test = TestBuilder::new().with_student_table().build().await?;
        let student = test
            .student()
            .insert_student_with_major("12345678", "Ada", "Mathematics")
            .await?;

        let resp = edit_student(
            State(test.app_state()),
            test.session.clone(),
            Path(student.id.to_string()),
        )
        .await
        .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains(r#"value="12345678""#));
        assert!(body.contains(r#"value="Mathematics""#));
        assert!(body.contains(&format!(r#"action="/edit/{}""#, student.id)));

        Ok(())
    }

    /// Expect an unknown key to redirect to the list with a notice
    #[tokio::test]
    async fn redirects_for_unknown_key() -> Result<(), TestError> {
        let test = TestBuilder::new().with_student_table().build().await?;

        for key in ["42", "not-a-key"] {
            let resp = edit_student(
                State(test.app_state()),
                test.session.clone(),
                Path(key.to_string()),
            )
            .await
            .unwrap();

            assert_eq!(resp.status(), StatusCode::SEE_OTHER);
            assert_eq!(location(&resp), "/students");
            assert_eq!(
                SessionFlash::take(&test.session).await.unwrap(),
                Some("Student not found".to_string())
            );
        }

        Ok(())
    }
}

mod update_student {
    use super::*;

    /// Expect a record to keep its own student ID
    #[tokio::test]
    async fn keeps_own_student_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_student_table().build().await?;
        let student = test.student().insert_student("12345678", "Ada").await?;

        let resp = update_student(
            State(test.app_state()),
            test.session.clone(),
            Path(student.id.to_string()),
            Form(form("12345678", "Ada Lovelace")),
        )
        .await
        .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            SessionFlash::take(&test.session).await.unwrap(),
            Some("Student updated".to_string())
        );

        let stored = entity::prelude::Student::find_by_id(student.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(stored.name, "Ada Lovelace");
        assert_eq!(stored.major.as_deref(), Some("Physics"));

        Ok(())
    }

    /// Expect another record's student ID to be rejected
    #[tokio::test]
    async fn rejects_taken_student_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_student_table().build().await?;
        test.student().insert_student("12345678", "Ada").await?;
        let grace = test.student().insert_student("87654321", "Grace").await?;

        let resp = update_student(
            State(test.app_state()),
            test.session.clone(),
            Path(grace.id.to_string()),
            Form(form("12345678", "Grace")),
        )
        .await
        .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(resp).await;
        assert!(body.contains("Student ID already exists! Please enter another."));

        let stored = entity::prelude::Student::find_by_id(grace.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(stored.student_id, "87654321");

        Ok(())
    }

    /// Expect an unknown key to redirect even for an invalid submission
    #[tokio::test]
    async fn redirects_for_unknown_key() -> Result<(), TestError> {
        let test = TestBuilder::new().with_student_table().build().await?;

        let resp = update_student(
            State(test.app_state()),
            test.session.clone(),
            Path("42".to_string()),
            Form(form("123", "Ada")),
        )
        .await
        .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/students");

        Ok(())
    }
}

mod delete_student {
    use super::*;

    /// Expect the record to be removed
    #[tokio::test]
    async fn deletes_record() -> Result<(), TestError> {
        let test = TestBuilder::new().with_student_table().build().await?;
        let student = test.student().insert_student("12345678", "Ada").await?;

        let resp = delete_student(
            State(test.app_state()),
            test.session.clone(),
            Path(student.id.to_string()),
        )
        .await
        .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/students");

        let count = entity::prelude::Student::find().count(&test.db).await?;
        assert_eq!(count, 0);

        Ok(())
    }

    /// Expect an unknown key to redirect without a notice
    #[tokio::test]
    async fn unknown_key_still_redirects() -> Result<(), TestError> {
        let test = TestBuilder::new().with_student_table().build().await?;

        let resp = delete_student(
            State(test.app_state()),
            test.session.clone(),
            Path("42".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/students");
        assert_eq!(SessionFlash::take(&test.session).await.unwrap(), None);

        Ok(())
    }
}
