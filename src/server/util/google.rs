//! Google OAuth2 client.

use oauth2::{
    basic::BasicClient, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    EndpointNotSet, EndpointSet, RedirectUrl, Scope, TokenResponse, TokenUrl,
};

use crate::server::{
    config::GoogleSettings,
    error::Error,
    model::auth::{GoogleLogin, GoogleProfile},
};

/// Scopes requested from Google, enough to read the display name and email
pub const GOOGLE_SCOPES: [&str; 3] = ["openid", "profile", "email"];

type OAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// OAuth2 client configured for the Google authorization code flow
#[derive(Clone)]
pub struct GoogleClient {
    oauth: OAuthClient,
    http: reqwest::Client,
    userinfo_url: String,
}

impl GoogleClient {
    pub fn new(settings: &GoogleSettings) -> Result<Self, Error> {
        let oauth = BasicClient::new(ClientId::new(settings.client_id.clone()))
            .set_client_secret(ClientSecret::new(settings.client_secret.clone()))
            .set_auth_uri(AuthUrl::new(settings.auth_url.clone())?)
            .set_token_uri(TokenUrl::new(settings.token_url.clone())?)
            .set_redirect_uri(RedirectUrl::new(settings.callback_url.clone())?);

        // Following redirects on the token endpoint would expose the client secret
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            oauth,
            http,
            userinfo_url: settings.userinfo_url.clone(),
        })
    }

    /// Builds the URL to send the browser to, along with a fresh CSRF state
    pub fn login_url(&self) -> GoogleLogin {
        let (url, state) = self
            .oauth
            .authorize_url(CsrfToken::new_random)
            .add_scopes(GOOGLE_SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
            .url();

        GoogleLogin {
            login_url: url.to_string(),
            state: state.secret().to_string(),
        }
    }

    /// Exchanges an authorization code for an access token and fetches the user's profile
    pub async fn fetch_profile(&self, code: &str) -> Result<GoogleProfile, Error> {
        let token = self
            .oauth
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http)
            .await?;

        let profile = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<GoogleProfile>()
            .await?;

        Ok(profile)
    }
}
