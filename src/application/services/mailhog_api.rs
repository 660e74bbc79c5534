use crate::application::config::Configuration;
use crate::constants::DEFAULT_MAIL_LIMIT;
use crate::error::AppError;
use crate::model::http::{RequestParams, RestClient, RestResponse};

/// Client for the MailHog v2 API
#[derive(Debug, Clone)]
pub struct MailhogApi {
    rest: RestClient,
}

impl MailhogApi {
    /// Creates the client
    pub fn new(configuration: &Configuration) -> Result<Self, AppError> {
        Ok(Self {
            rest: RestClient::new(configuration)?,
        })
    }

    /// Underlying HTTP client
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// Fetches the `limit` most recent messages, undecoded
    pub async fn get_api_v2_messages(&self, limit: u32) -> Result<RestResponse, AppError> {
        self.rest
            .get(
                "/api/v2/messages",
                RequestParams::new().with_query("limit", limit),
            )
            .await
    }

    /// Fetches the default number of recent messages
    pub async fn get_api_v2_messages_default(&self) -> Result<RestResponse, AppError> {
        self.get_api_v2_messages(DEFAULT_MAIL_LIMIT).await
    }
}
