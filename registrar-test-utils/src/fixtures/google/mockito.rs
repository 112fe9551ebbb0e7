use mockito::Mock;
use serde_json::json;

use crate::{constant::TEST_GOOGLE_ACCESS_TOKEN, fixtures::google::GoogleFixtures};

impl<'a> GoogleFixtures<'a> {
    /// Create the token and userinfo endpoints for a full OAuth2 code exchange.
    ///
    /// The userinfo endpoint only answers requests bearing the mock access token.
    pub fn create_google_endpoints(
        &mut self,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Vec<Mock> {
        let token = self.create_token_endpoint();

        let mut profile = json!({ "sub": "1234567890" });
        if let Some(name) = name {
            profile["name"] = json!(name);
        }
        if let Some(email) = email {
            profile["email"] = json!(email);
        }

        let userinfo = self
            .setup
            .server
            .mock("GET", "/userinfo")
            .match_header(
                "authorization",
                format!("Bearer {}", TEST_GOOGLE_ACCESS_TOKEN).as_str(),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(profile.to_string())
            .expect(1)
            .create();

        vec![token, userinfo]
    }

    /// Create the token endpoint returning the mock access token
    pub fn create_token_endpoint(&mut self) -> Mock {
        let body = json!({
            "access_token": TEST_GOOGLE_ACCESS_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600,
        });

        self.setup
            .server
            .mock("POST", "/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(1)
            .create()
    }
}
