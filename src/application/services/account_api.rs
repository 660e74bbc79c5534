use crate::application::config::Configuration;
use crate::error::AppError;
use crate::model::http::{RequestParams, RestClient, RestResponse, Session};
use crate::model::requests::{ChangeEmail, ChangePassword, Registration, ResetPassword};
use crate::model::responses::{UserDetailsEnvelope, UserEnvelope};
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::debug;

/// Client for the `/v1/account` resource group
///
/// Plain methods return the buffered response; the `_envelope` variants
/// decode it into the typed envelope and the `_raw` variants accept an
/// untyped payload for negative scenarios.
#[derive(Debug, Clone)]
pub struct AccountApi {
    rest: RestClient,
}

impl AccountApi {
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

    /// Registers a new user; the service answers 201
    pub async fn post_v1_account(
        &self,
        registration: &Registration,
    ) -> Result<RestResponse, AppError> {
        debug!("Registering user {}", registration.login);
        self.rest
            .post("/v1/account", RequestParams::new().with_json(registration)?)
            .await
    }

    /// Registers a new user from an untyped payload
    pub async fn post_v1_account_raw(&self, json_data: &Value) -> Result<RestResponse, AppError> {
        self.rest
            .post(
                "/v1/account",
                RequestParams::new().with_json_value(json_data.clone()),
            )
            .await
    }

    /// Resets the password of a registered user
    pub async fn post_v1_account_password(
        &self,
        reset_password: &ResetPassword,
    ) -> Result<RestResponse, AppError> {
        debug!("Resetting password of {}", reset_password.login);
        self.rest
            .post(
                "/v1/account/password",
                RequestParams::new().with_json(reset_password)?,
            )
            .await
    }

    /// Resets the password and decodes the returned user
    pub async fn post_v1_account_password_envelope(
        &self,
        reset_password: &ResetPassword,
    ) -> Result<UserEnvelope, AppError> {
        self.post_v1_account_password(reset_password).await?.json()
    }

    /// Changes the password of a registered user
    pub async fn put_v1_account_password(
        &self,
        change_password: &ChangePassword,
    ) -> Result<RestResponse, AppError> {
        debug!("Changing password of {}", change_password.login);
        self.rest
            .put(
                "/v1/account/password",
                RequestParams::new().with_json(change_password)?,
            )
            .await
    }

    /// Changes the password and decodes the returned user
    pub async fn put_v1_account_password_envelope(
        &self,
        change_password: &ChangePassword,
    ) -> Result<UserEnvelope, AppError> {
        self.put_v1_account_password(change_password).await?.json()
    }

    /// Gets the current user; requires the auth token header
    pub async fn get_v1_account(&self) -> Result<RestResponse, AppError> {
        self.rest.get("/v1/account", RequestParams::new()).await
    }

    /// Gets the current user and decodes the profile
    pub async fn get_v1_account_envelope(&self) -> Result<UserDetailsEnvelope, AppError> {
        self.get_v1_account().await?.json()
    }

    /// Activates a registered user
    pub async fn put_v1_account_token(&self, token: &str) -> Result<RestResponse, AppError> {
        if token.is_empty() || token.contains('/') {
            return Err(AppError::InvalidInput(format!(
                "activation token {token:?} is not a single path segment"
            )));
        }
        debug!("Activating user with token {}", token);
        self.rest
            .put(
                &format!("/v1/account/{token}"),
                RequestParams::new().with_header(ACCEPT.as_str(), "text/plain"),
            )
            .await
    }

    /// Activates a registered user and decodes the returned user
    pub async fn put_v1_account_token_envelope(
        &self,
        token: &str,
    ) -> Result<UserEnvelope, AppError> {
        self.put_v1_account_token(token).await?.json()
    }

    /// Changes the email of a registered user
    pub async fn put_v1_account_email(
        &self,
        change_email: &ChangeEmail,
    ) -> Result<RestResponse, AppError> {
        debug!("Changing email of {}", change_email.login);
        self.rest
            .put(
                "/v1/account/email",
                RequestParams::new().with_json(change_email)?,
            )
            .await
    }

    /// Changes the email from an untyped payload
    pub async fn put_v1_account_email_raw(
        &self,
        json_data: &Value,
    ) -> Result<RestResponse, AppError> {
        self.rest
            .put(
                "/v1/account/email",
                RequestParams::new().with_json_value(json_data.clone()),
            )
            .await
    }

    /// Changes the email and decodes the returned user
    pub async fn put_v1_account_email_envelope(
        &self,
        change_email: &ChangeEmail,
    ) -> Result<UserEnvelope, AppError> {
        self.put_v1_account_email(change_email).await?.json()
    }

    /// Logs out the current session
    pub async fn delete_v1_account_login(&self) -> Result<RestResponse, AppError> {
        self.rest
            .delete("/v1/account/login", RequestParams::new())
            .await
    }

    /// Logs out from every device
    pub async fn delete_v1_account_login_all(&self) -> Result<RestResponse, AppError> {
        self.rest
            .delete("/v1/account/login/all", RequestParams::new())
            .await
    }
}
