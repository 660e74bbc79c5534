/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! User-lifecycle flows for end-to-end scenarios
//!
//! [`AccountHelper`] chains the account and MailHog facades into complete
//! flows: registration with activation, login, binding the auth token to the
//! session, password reset, email change and logout. Every checkpoint stops
//! the flow with [`AppError::Assertion`] (or a more specific variant) as soon
//! as the service answers something unexpected.

use crate::application::client::{DmApiAccount, MailHogApi};
use crate::checkers::check_status_code_http;
use crate::constants::{AUTH_TOKEN_HEADER, INACTIVE_USER_TITLE};
use crate::error::AppError;
use crate::model::http::RestResponse;
use crate::model::mail::MessagesPage;
use crate::model::requests::{
    ChangeEmail, ChangePassword, LoginCredentials, Registration, ResetPassword,
};
use crate::model::responses::UserEnvelope;
use crate::model::retry::{Clock, PollConfig, TokioClock, poll_until_some};
use reqwest::StatusCode;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Switches of [`AccountHelper::user_login`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginOptions {
    /// Sent as `rememberMe` (default `true`)
    pub remember_me: bool,
    /// Decode the body into a [`UserEnvelope`]
    pub validate_response: bool,
    /// Require a non-empty `x-dm-auth-token` header
    pub validate_headers: bool,
}

impl Default for LoginOptions {
    fn default() -> Self {
        Self {
            remember_me: true,
            validate_response: false,
            validate_headers: false,
        }
    }
}

impl LoginOptions {
    /// Sets `remember_me`
    #[must_use]
    pub fn remember_me(mut self, remember_me: bool) -> Self {
        self.remember_me = remember_me;
        self
    }

    /// Sets `validate_response`
    #[must_use]
    pub fn validate_response(mut self, validate: bool) -> Self {
        self.validate_response = validate;
        self
    }

    /// Sets `validate_headers`
    #[must_use]
    pub fn validate_headers(mut self, validate: bool) -> Self {
        self.validate_headers = validate;
        self
    }
}

/// A response plus its decoded envelope when decoding was requested
#[derive(Debug, Clone)]
pub struct ValidatedResponse<T> {
    /// Buffered response
    pub response: RestResponse,
    /// Decoded body, `None` unless validation was requested
    pub envelope: Option<T>,
}

impl<T> ValidatedResponse<T> {
    /// Response status
    pub fn status(&self) -> StatusCode {
        self.response.status
    }

    /// Non-empty `x-dm-auth-token` header
    pub fn auth_token(&self) -> Option<&str> {
        self.response
            .header(AUTH_TOKEN_HEADER)
            .filter(|token| !token.is_empty())
    }
}

/// Result of [`AccountHelper::user_login`]
pub type LoginResponse = ValidatedResponse<UserEnvelope>;

/// Orchestrates multi-step account flows over the account and MailHog facades
///
/// Holds no state between calls apart from the headers pushed into the
/// account session by [`AccountHelper::auth_client`].
pub struct AccountHelper {
    dm_account_api: DmApiAccount,
    mailhog: MailHogApi,
    poll: PollConfig,
    clock: Arc<dyn Clock>,
}

impl AccountHelper {
    /// Creates a helper with the default poll settings and the wall clock
    pub fn new(dm_account_api: DmApiAccount, mailhog: MailHogApi) -> Self {
        Self {
            dm_account_api,
            mailhog,
            poll: PollConfig::default(),
            clock: Arc::new(TokioClock),
        }
    }

    /// Replaces the poll settings
    #[must_use]
    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    /// Replaces the clock used for poll delays and the activation deadline
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Account service facade
    pub fn dm_account_api(&self) -> &DmApiAccount {
        &self.dm_account_api
    }

    /// MailHog facade
    pub fn mailhog(&self) -> &MailHogApi {
        &self.mailhog
    }

    /// Poll settings in use
    pub fn poll_config(&self) -> &PollConfig {
        &self.poll
    }

    /// Logs in and binds the returned token to the account session
    ///
    /// Must run before any call that needs authentication; both the account
    /// and the login client send the token afterwards.
    pub async fn auth_client(&self, login: &str, password: &str) -> Result<(), AppError> {
        let response = self
            .user_login(login, password, LoginOptions::default())
            .await?;
        let token = response
            .auth_token()
            .ok_or_else(|| AppError::MissingHeader(AUTH_TOKEN_HEADER.to_string()))?;
        self.dm_account_api
            .set_headers([(AUTH_TOKEN_HEADER, token)])
            .await?;
        info!("Session bound to {}", login);
        Ok(())
    }

    /// Registers a user and activates it with the token from the mail
    ///
    /// Fails with [`AppError::ActivationTimeout`] when the token took longer
    /// than the activation deadline and with [`AppError::TokenNotFound`] when
    /// it never arrived.
    pub async fn register_new_user(
        &self,
        login: &str,
        password: &str,
        email: &str,
    ) -> Result<RestResponse, AppError> {
        let registration = Registration::new(login, password, email);
        let response = self
            .dm_account_api
            .account_api
            .post_v1_account(&registration)
            .await?;
        ensure_status(&response, StatusCode::CREATED, "user was not created")?;

        let started = self.clock.now();
        let token = self.get_activation_token_by_login(login).await?;
        let elapsed = self.clock.now().saturating_duration_since(started);
        let limit = self.poll.activation_deadline();
        if elapsed >= limit {
            return Err(AppError::ActivationTimeout {
                login: login.to_string(),
                elapsed,
                limit,
            });
        }
        let token = token.ok_or_else(|| AppError::TokenNotFound {
            login: login.to_string(),
        })?;

        let response = self
            .dm_account_api
            .account_api
            .put_v1_account_token(&token)
            .await?;
        ensure_status(&response, StatusCode::OK, "user was not activated")?;
        info!("User {} registered and activated", login);
        Ok(response)
    }

    /// Logs in, optionally decoding the user and requiring the token header
    pub async fn user_login(
        &self,
        login: &str,
        password: &str,
        options: LoginOptions,
    ) -> Result<LoginResponse, AppError> {
        let credentials = LoginCredentials::new(login, password, options.remember_me);
        let response = self
            .dm_account_api
            .login_api
            .post_v1_account_login(&credentials)
            .await?;

        let envelope = if options.validate_response {
            Some(response.json::<UserEnvelope>()?)
        } else {
            None
        };
        let login_response = ValidatedResponse { response, envelope };

        if options.validate_headers && login_response.auth_token().is_none() {
            return Err(AppError::MissingHeader(format!(
                "{AUTH_TOKEN_HEADER} was not returned for {login}"
            )));
        }
        Ok(login_response)
    }

    /// Logs out the current session
    pub async fn user_logout(&self) -> Result<RestResponse, AppError> {
        self.dm_account_api
            .account_api
            .delete_v1_account_login()
            .await
    }

    /// Logs out every session of the current user
    pub async fn user_logout_every_device(&self) -> Result<RestResponse, AppError> {
        self.dm_account_api
            .account_api
            .delete_v1_account_login_all()
            .await
    }

    /// Requests a password reset mail
    pub async fn reset_user_password(
        &self,
        login: &str,
        email: &str,
    ) -> Result<RestResponse, AppError> {
        let reset_password = ResetPassword::new(login, email);
        self.dm_account_api
            .account_api
            .post_v1_account_password(&reset_password)
            .await
    }

    /// Resets the password and sets `new_password` with the mailed token
    ///
    /// Only a mail captured after the reset request is accepted. Does not log
    /// in again; returns the new password.
    pub async fn change_password(
        &self,
        login: &str,
        email: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<String, AppError> {
        let seen = self.captured_mail_ids(login).await?;
        self.reset_user_password(login, email).await?;
        let token = self.fetch_new_activation_token(login, &seen).await?;
        let change_password = ChangePassword::new(login, token, old_password, new_password);
        self.dm_account_api
            .account_api
            .put_v1_account_password(&change_password)
            .await?;
        info!("Password of {} changed", login);
        Ok(new_password.to_string())
    }

    /// Changes the email; the service answers 200 and deactivates the account
    pub async fn change_email_user(
        &self,
        login: &str,
        password: &str,
        email: &str,
    ) -> Result<RestResponse, AppError> {
        let change_email = ChangeEmail::new(login, password, email);
        let response = self
            .dm_account_api
            .account_api
            .put_v1_account_email(&change_email)
            .await?;
        ensure_status(&response, StatusCode::OK, "email was not changed")?;
        Ok(response)
    }

    /// Full email change: change, verify the account is inactive, reactivate, log in
    ///
    /// The reactivation token must come from a mail captured after the change.
    pub async fn change_email_and_reactivate(
        &self,
        login: &str,
        password: &str,
        email: &str,
    ) -> Result<LoginResponse, AppError> {
        let seen = self.captured_mail_ids(login).await?;
        self.change_email_user(login, password, email).await?;

        let credentials = LoginCredentials::new(login, password, true);
        let attempt = self
            .dm_account_api
            .login_api
            .post_v1_account_login(&credentials)
            .await;
        check_status_code_http(attempt, StatusCode::FORBIDDEN, INACTIVE_USER_TITLE)?;

        let token = self.fetch_new_activation_token(login, &seen).await?;
        self.activate_user(&token, false).await?;
        self.user_login(login, password, LoginOptions::default().validate_headers(true))
            .await
    }

    /// Activates a user with `token`; the service must answer 200
    pub async fn activate_user(
        &self,
        token: &str,
        validate_response: bool,
    ) -> Result<ValidatedResponse<UserEnvelope>, AppError> {
        let response = self
            .dm_account_api
            .account_api
            .put_v1_account_token(token)
            .await?;
        ensure_status(&response, StatusCode::OK, "user was not activated")?;
        let envelope = if validate_response {
            Some(response.json::<UserEnvelope>()?)
        } else {
            None
        };
        Ok(ValidatedResponse { response, envelope })
    }

    /// Token for `login`, or [`AppError::TokenNotFound`] when the poll gives up
    pub async fn fetch_activation_token(&self, login: &str) -> Result<String, AppError> {
        self.get_activation_token_by_login(login)
            .await?
            .ok_or_else(|| AppError::TokenNotFound {
                login: login.to_string(),
            })
    }

    /// Token for `login` from a mail that is not in `seen`, or [`AppError::TokenNotFound`]
    pub async fn fetch_new_activation_token(
        &self,
        login: &str,
        seen: &HashSet<String>,
    ) -> Result<String, AppError> {
        self.poll_activation_token(login, seen)
            .await?
            .ok_or_else(|| AppError::TokenNotFound {
                login: login.to_string(),
            })
    }

    /// Ids of the activation mails already captured for `login`
    ///
    /// Taken before an action that mails a new token, then handed to
    /// [`AccountHelper::fetch_new_activation_token`].
    pub async fn captured_mail_ids(&self, login: &str) -> Result<HashSet<String>, AppError> {
        let page: MessagesPage = self
            .mailhog
            .mailhog_api
            .get_api_v2_messages(self.poll.limit)
            .await?
            .json()?;
        let seen = page.message_ids_for(login);
        debug!("{} mails already captured for {}", seen.len(), login);
        Ok(seen)
    }

    /// Polls MailHog for the newest activation token of `login`
    ///
    /// Each attempt fetches the `limit` newest messages and scans them; no
    /// match means another attempt after the fixed delay. `Ok(None)` once the
    /// attempts are spent. Transport and HTTP errors end the poll at once.
    pub async fn get_activation_token_by_login(
        &self,
        login: &str,
    ) -> Result<Option<String>, AppError> {
        self.poll_activation_token(login, &HashSet::new()).await
    }

    async fn poll_activation_token(
        &self,
        login: &str,
        seen: &HashSet<String>,
    ) -> Result<Option<String>, AppError> {
        let limit = self.poll.limit;
        let mailhog = &self.mailhog.mailhog_api;
        let token = poll_until_some(&self.poll, self.clock.as_ref(), move |attempt| async move {
            debug!("Looking for activation token of {} (attempt {})", login, attempt);
            let page: MessagesPage = mailhog.get_api_v2_messages(limit).await?.json()?;
            Ok(page.find_activation_token_excluding(login, seen))
        })
        .await?;

        if token.is_none() {
            warn!(
                "No activation token for {} after {} attempts",
                login,
                self.poll.max_attempts()
            );
        }
        Ok(token)
    }
}

fn ensure_status(
    response: &RestResponse,
    expected: StatusCode,
    what: &str,
) -> Result<(), AppError> {
    if response.status == expected {
        return Ok(());
    }
    Err(AppError::Assertion(format!(
        "{what}: expected {expected}, got {}: {}",
        response.status, response.body
    )))
}
