use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use oauth2::url::Url;
use registrar::server::{
    controller::auth::{
        google_callback, google_login, login, login_page, logout, CallbackParams, LoginForm,
        GOOGLE_LOGIN_FAILED_NOTICE,
    },
    model::session::{
        auth::SessionAuthCsrf,
        flash::SessionFlash,
        user::{AuthState, SessionAuth},
    },
};
use registrar_test_utils::{
    constant::{TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME},
    prelude::*,
};

use crate::{
    util::{body_string, location},
    TestContextExt,
};

fn callback_params(state: &str) -> Query<CallbackParams> {
    Query(CallbackParams {
        state: state.to_string(),
        code: Some("code".to_string()),
        error: None,
    })
}

mod login_page {
    use super::*;

    /// Expect the login form along with the pending notice
    #[tokio::test]
    async fn renders_form_with_notice() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionFlash::insert(&test.session, "Please log in to continue")
            .await
            .unwrap();

        let resp = login_page(test.session.clone()).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains(r#"action="/login""#));
        assert!(body.contains("Please log in to continue"));

        Ok(())
    }
}

mod login {
    use super::*;

    /// Expect the static credential to log the session in
    #[tokio::test]
    async fn logs_in_with_valid_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let form = LoginForm {
            username: TEST_ADMIN_USERNAME.to_string(),
            password: TEST_ADMIN_PASSWORD.to_string(),
        };
        let resp = login(State(test.app_state()), test.session.clone(), Form(form))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/students");
        assert_eq!(
            SessionAuth::get(&test.session).await.unwrap(),
            AuthState::LocalAuthenticated {
                username: TEST_ADMIN_USERNAME.to_string()
            }
        );

        Ok(())
    }

    /// Expect 401 and the form again for a wrong password
    #[tokio::test]
    async fn rejects_invalid_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let form = LoginForm {
            username: TEST_ADMIN_USERNAME.to_string(),
            password: "wrong".to_string(),
        };
        let resp = login(State(test.app_state()), test.session.clone(), Form(form))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = body_string(resp).await;
        assert!(body.contains("Invalid username or password"));
        assert!(!SessionAuth::get(&test.session)
            .await
            .unwrap()
            .is_authenticated());

        Ok(())
    }
}

mod google_login {
    use super::*;

    /// Expect a 307 to Google carrying the state stored in the session
    #[tokio::test]
    async fn redirects_with_session_state() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let resp = google_login(State(test.app_state()), test.session.clone())
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        let url = Url::parse(&location(&resp)).unwrap();
        assert!(url.as_str().starts_with(&test.google.auth_url));

        let state = url
            .query_pairs()
            .find(|(key, _)| key == "state")
            .map(|(_, value)| value.into_owned())
            .unwrap();
        assert_eq!(SessionAuthCsrf::take(&test.session).await.unwrap(), state);

        Ok(())
    }
}

mod google_callback {
    use super::*;

    /// Expect the Google display name to become the principal
    #[tokio::test]
    async fn logs_in_with_display_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_google_endpoints(Some("Ada Lovelace"), Some("ada@example.com"))
            .build()
            .await?;
        SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

        let resp = google_callback(
            State(test.app_state()),
            test.session.clone(),
            callback_params("state"),
        )
        .await
        .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/students");
        assert_eq!(
            SessionAuth::get(&test.session).await.unwrap(),
            AuthState::FederatedAuthenticated {
                display_name: "Ada Lovelace".to_string()
            }
        );
        test.assert_mocks();

        Ok(())
    }

    /// Expect the email to stand in when the profile has no name
    #[tokio::test]
    async fn falls_back_to_email() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_google_endpoints(None, Some("ada@example.com"))
            .build()
            .await?;
        SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

        google_callback(
            State(test.app_state()),
            test.session.clone(),
            callback_params("state"),
        )
        .await
        .unwrap();

        assert_eq!(
            SessionAuth::get(&test.session)
                .await
                .unwrap()
                .principal(),
            Some("ada@example.com")
        );

        Ok(())
    }

    /// Expect 400 Bad Request when the state does not match
    #[tokio::test]
    async fn rejects_state_mismatch() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

        let resp = google_callback(
            State(test.app_state()),
            test.session.clone(),
            callback_params("other"),
        )
        .await
        .unwrap_err()
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(!SessionAuth::get(&test.session)
            .await
            .unwrap()
            .is_authenticated());

        Ok(())
    }

    /// Expect a declined consent to return to the login page with a notice
    #[tokio::test]
    async fn redirects_when_consent_declined() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

        let params = Query(CallbackParams {
            state: "state".to_string(),
            code: None,
            error: Some("access_denied".to_string()),
        });
        let resp = google_callback(State(test.app_state()), test.session.clone(), params)
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/login");
        assert_eq!(
            SessionFlash::take(&test.session).await.unwrap(),
            Some(GOOGLE_LOGIN_FAILED_NOTICE.to_string())
        );

        Ok(())
    }
}

mod logout {
    use super::*;

    /// Expect the session to be logged out and redirected to the login page
    #[tokio::test]
    async fn clears_session() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionAuth::insert(
            &test.session,
            AuthState::LocalAuthenticated {
                username: TEST_ADMIN_USERNAME.to_string(),
            },
        )
        .await
        .unwrap();

        let resp = logout(test.session.clone()).await.unwrap().into_response();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/login");
        assert_eq!(
            SessionAuth::get(&test.session).await.unwrap(),
            AuthState::Anonymous
        );

        Ok(())
    }

    /// Expect an anonymous logout to redirect without error
    #[tokio::test]
    async fn anonymous_logout_redirects() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let resp = logout(test.session.clone()).await.unwrap().into_response();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        Ok(())
    }
}
