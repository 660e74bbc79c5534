/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # DM Account Client Prelude
//!
//! Brings the commonly used types into scope with a single import.
//!
//! ## Usage
//!
//! ```rust
//! use dm_account_client::prelude::*;
//!
//! let config = Configuration::new("http://localhost:5051").with_disable_log(false);
//! assert_eq!(config.host(), "http://localhost:5051");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Backend and run configuration
pub use crate::application::config::{Config, Configuration};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, ErrorBody, HttpError};

/// Status assertions for negative scenarios
pub use crate::checkers::check_status_code_http;

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP client base
pub use crate::model::http::{RequestParams, RestClient, RestResponse, Session};

// ============================================================================
// CLIENTS, FACADES AND FLOWS
// ============================================================================

/// Resource clients
pub use crate::application::services::{AccountApi, LoginApi, MailhogApi};

/// Facades
pub use crate::application::client::{DmApiAccount, MailHogApi};

/// Flow helper
pub use crate::application::helper::{
    AccountHelper, LoginOptions, LoginResponse, ValidatedResponse,
};

/// Poll settings and clock
pub use crate::model::retry::{Clock, PollConfig, TokioClock, poll_until_some};

// ============================================================================
// MODELS
// ============================================================================

/// Request payloads
pub use crate::model::requests::{
    ChangeEmail, ChangePassword, LoginCredentials, Registration, RequestRecord, ResetPassword,
};

/// Response payloads
pub use crate::model::responses::{
    BbParseMode, ColorSchema, InfoBbText, PagingSettings, Rating, User, UserDetails,
    UserDetailsEnvelope, UserEnvelope, UserRole, UserSettings,
};

/// Captured mail
pub use crate::model::mail::{ActivationMail, MailContent, MailItem, MessagesPage};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Test data
pub use crate::utils::id::{random_password, unique_email, unique_login};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use reqwest::{Method, StatusCode};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
