/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload of an account service endpoint
///
/// Typed construction is checked by the compiler. Untyped payloads go through
/// [`RequestRecord::from_json`], which rejects missing and unknown fields
/// before anything is sent.
pub trait RequestRecord: Serialize + DeserializeOwned {
    /// Builds the record from an untyped JSON payload using wire field names
    fn from_json(value: Value) -> Result<Self, AppError> {
        serde_json::from_value(value).map_err(|e| AppError::Validation(e.to_string()))
    }

    /// Wire representation of the record
    fn to_wire(&self) -> Result<Value, AppError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Model for registering a new user
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Registration {
    /// User login
    pub login: String,
    /// User password
    pub password: String,
    /// User email
    pub email: String,
}

impl Registration {
    /// Creates a registration payload
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            email: email.into(),
        }
    }
}

impl RequestRecord for Registration {}

/// Model for logging in
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginCredentials {
    /// User login
    pub login: String,
    /// User password
    pub password: String,
    /// Keep the session after the browser closes
    #[serde(rename = "rememberMe")]
    pub remember_me: bool,
}

impl LoginCredentials {
    /// Creates a login payload
    pub fn new(login: impl Into<String>, password: impl Into<String>, remember_me: bool) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            remember_me,
        }
    }
}

impl RequestRecord for LoginCredentials {}

/// Model for resetting a password; triggers a new confirmation mail
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResetPassword {
    /// User login
    pub login: String,
    /// Mailbox the reset link is sent to
    pub email: String,
}

impl ResetPassword {
    /// Creates a reset payload
    pub fn new(login: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            email: email.into(),
        }
    }
}

impl RequestRecord for ResetPassword {}

/// Model for changing a password with a reset token
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangePassword {
    /// User login
    pub login: String,
    /// Token from the reset mail
    pub token: String,
    /// Current password
    #[serde(rename = "oldPassword")]
    pub old_password: String,
    /// New password
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

impl ChangePassword {
    /// Creates a change-password payload
    pub fn new(
        login: impl Into<String>,
        token: impl Into<String>,
        old_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            token: token.into(),
            old_password: old_password.into(),
            new_password: new_password.into(),
        }
    }
}

impl RequestRecord for ChangePassword {}

/// Model for changing the email of an account; deactivates it until the new
/// address is confirmed
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangeEmail {
    /// User login
    pub login: String,
    /// User password
    pub password: String,
    /// New email
    pub email: String,
}

impl ChangeEmail {
    /// Creates a change-email payload
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            email: email.into(),
        }
    }
}

impl RequestRecord for ChangeEmail {}
