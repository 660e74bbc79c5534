/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::Configuration;
use crate::application::services::{AccountApi, LoginApi, MailhogApi};
use crate::error::AppError;
use crate::model::http::Session;
use tracing::debug;

/// Facade over the DM account service
///
/// `account_api` and `login_api` share one [`Session`], so a token pushed
/// through [`DmApiAccount::set_headers`] (or through either client) is sent by
/// both.
#[derive(Debug, Clone)]
pub struct DmApiAccount {
    /// Configuration both clients were built from
    pub configuration: Configuration,
    /// `/v1/account` client
    pub account_api: AccountApi,
    /// `/v1/account/login` client
    pub login_api: LoginApi,
    session: Session,
}

impl DmApiAccount {
    /// Builds both clients on one new session
    pub fn new(configuration: Configuration) -> Result<Self, AppError> {
        let session = Session::from_configuration(&configuration)?;
        let account_api = AccountApi::with_session(&configuration, session.clone());
        let login_api = LoginApi::with_session(&configuration, session.clone());
        Ok(Self {
            configuration,
            account_api,
            login_api,
            session,
        })
    }

    /// Merges headers into the shared session in one step
    pub async fn set_headers<I, K, V>(&self, headers: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        debug!("Updating default headers of the account session");
        self.session.set_headers(headers).await
    }

    /// The shared session
    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Facade over the MailHog capture service
#[derive(Debug, Clone)]
pub struct MailHogApi {
    /// Configuration the client was built from
    pub configuration: Configuration,
    /// MailHog v2 client
    pub mailhog_api: MailhogApi,
}

impl MailHogApi {
    /// Builds the MailHog client
    pub fn new(configuration: Configuration) -> Result<Self, AppError> {
        let mailhog_api = MailhogApi::new(&configuration)?;
        Ok(Self {
            configuration,
            mailhog_api,
        })
    }
}
