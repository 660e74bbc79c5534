use crate::application::config::Configuration;
use crate::error::AppError;
use crate::model::http::{RequestParams, RestClient, RestResponse, Session};
use crate::model::requests::LoginCredentials;
use crate::model::responses::UserEnvelope;
use serde_json::Value;
use tracing::debug;

/// Client for `POST /v1/account/login`
#[derive(Debug, Clone)]
pub struct LoginApi {
    rest: RestClient,
}

impl LoginApi {
    /// Creates the client with its own session
    pub fn new(configuration: &Configuration) -> Result<Self, AppError> {
        Ok(Self {
            rest: RestClient::new(configuration)?,
        })
    }

    /// Creates the client on a shared session
    pub fn with_session(configuration: &Configuration, session: Session) -> Self {
        Self {
            rest: RestClient::with_session(configuration, session),
        }
    }

    /// Underlying HTTP client
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// Merges headers into the session defaults
    pub async fn set_headers<I, K, V>(&self, headers: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.rest.set_headers(headers).await
    }

    /// Authenticates a user; the session token comes back in `x-dm-auth-token`
    pub async fn post_v1_account_login(
        &self,
        login_credentials: &LoginCredentials,
    ) -> Result<RestResponse, AppError> {
        debug!("Logging in as {}", login_credentials.login);
        self.rest
            .post(
                "/v1/account/login",
                RequestParams::new().with_json(login_credentials)?,
            )
            .await
    }

    /// Authenticates and decodes the returned user
    pub async fn post_v1_account_login_envelope(
        &self,
        login_credentials: &LoginCredentials,
    ) -> Result<UserEnvelope, AppError> {
        self.post_v1_account_login(login_credentials).await?.json()
    }

    /// Authenticates with an untyped payload
    pub async fn post_v1_account_login_raw(
        &self,
        json_data: &Value,
    ) -> Result<RestResponse, AppError> {
        self.rest
            .post(
                "/v1/account/login",
                RequestParams::new().with_json_value(json_data.clone()),
            )
            .await
    }
}
