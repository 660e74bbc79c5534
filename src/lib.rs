/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # DM Account Client
//!
//! Typed async clients for the DM account service and the MailHog capture
//! service, plus an [`AccountHelper`](application::helper::AccountHelper) that
//! chains them into complete user-lifecycle flows for end-to-end tests.
//!
//! ## Layers
//!
//! - [`model::http::RestClient`]: host + path requests over a shared session,
//!   header merging, structured request/response logging and a typed error
//!   for every non-2xx response.
//! - [`application::services`]: one client per resource group
//!   (`AccountApi`, `LoginApi`, `MailhogApi`).
//! - [`application::client`]: facades that share one configuration and one
//!   header session between related clients.
//! - [`application::helper`]: registration + activation, login, password
//!   reset, email change and logout flows, including the bounded poll that
//!   pulls activation tokens out of captured mail.
//!
//! ## Example
//!
//! ```no_run
//! use dm_account_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let config = Config::new();
//!     let account = DmApiAccount::new(config.account.clone())?;
//!     let mailhog = MailHogApi::new(config.mailhog.clone())?;
//!     let helper = AccountHelper::new(account, mailhog).with_poll_config(config.poll.clone());
//!
//!     let login = unique_login("golovan");
//!     helper
//!         .register_new_user(&login, "112233", &unique_email(&login))
//!         .await?;
//!     helper.auth_client(&login, "112233").await?;
//!     Ok(())
//! }
//! ```

/// Service facades, resource clients, configuration and flow helpers
pub mod application;
/// Status checkers for negative-path scenarios
pub mod checkers;
/// Crate-wide constants (endpoints, header names, poll defaults)
pub mod constants;
/// Error types
pub mod error;
/// Wire models, the HTTP client base and poll configuration
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Environment, logging and test-data utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
