//! MailHog message pages and the activation mails carried inside them.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Page returned by `GET /api/v2/messages`
///
/// Only `items[].Content.Body` is interpreted; everything else is carried
/// along for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessagesPage {
    /// Messages held by the server
    #[serde(default)]
    pub total: u32,
    /// Messages in this page
    #[serde(default)]
    pub count: u32,
    /// Offset of the page
    #[serde(default)]
    pub start: u32,
    /// Messages, newest first
    #[serde(default)]
    pub items: Vec<MailItem>,
}

/// One captured message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MailItem {
    /// MailHog message id
    #[serde(rename = "ID", default)]
    pub id: String,
    /// Headers and body
    #[serde(rename = "Content")]
    pub content: Option<MailContent>,
}

/// Content of a captured message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MailContent {
    /// Raw body; the account service puts a JSON document here
    #[serde(rename = "Body", default)]
    pub body: String,
    /// Mail headers
    #[serde(rename = "Headers", default)]
    pub headers: HashMap<String, Vec<String>>,
}

/// JSON body of a confirmation mail sent by the account service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationMail {
    /// Login the mail was sent for
    #[serde(rename = "Login")]
    pub login: String,
    /// Confirmation link (registration and email change mails)
    #[serde(rename = "ConfirmationLinkUrl", default)]
    pub confirmation_link_url: Option<String>,
    /// Confirmation link (password reset mails)
    #[serde(rename = "ConfirmationLinkUri", default)]
    pub confirmation_link_uri: Option<String>,
}

impl ActivationMail {
    /// Parses a mail body
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Token carried by the mail
    ///
    /// `ConfirmationLinkUrl` wins whenever it is present and non-empty;
    /// `ConfirmationLinkUri` is only consulted otherwise. The token is the last
    /// path segment of the chosen link; an empty segment yields `None`.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        let link = match self.confirmation_link_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => self.confirmation_link_uri.as_deref()?,
        };
        link.rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
    }
}

impl MessagesPage {
    /// Token from the newest message addressed to `login`
    ///
    /// Messages without content or with a body that is not an activation mail
    /// are skipped. Returns `None` when nothing in this page matches.
    #[must_use]
    pub fn find_activation_token(&self, login: &str) -> Option<String> {
        self.find_activation_token_excluding(login, &HashSet::new())
    }

    /// Like [`MessagesPage::find_activation_token`], ignoring the messages in `seen`
    ///
    /// Used after an action that mails a new token while older mails for the
    /// same login (already redeemed) are still captured.
    #[must_use]
    pub fn find_activation_token_excluding(
        &self,
        login: &str,
        seen: &HashSet<String>,
    ) -> Option<String> {
        for (item, mail) in self.mails_for(login) {
            if seen.contains(&item.id) {
                debug!("Message {} was captured before, skipping", item.id);
                continue;
            }
            match mail.token() {
                Some(token) => return Some(token),
                None => debug!("Message {} for {} carries no link", item.id, login),
            }
        }
        None
    }

    /// Ids of the captured activation mails addressed to `login`
    #[must_use]
    pub fn message_ids_for(&self, login: &str) -> HashSet<String> {
        self.mails_for(login)
            .map(|(item, _)| item.id.clone())
            .collect()
    }

    fn mails_for<'a>(
        &'a self,
        login: &'a str,
    ) -> impl Iterator<Item = (&'a MailItem, ActivationMail)> + 'a {
        self.items.iter().filter_map(move |item| {
            let Some(content) = item.content.as_ref() else {
                debug!("Message {} has no content, skipping", item.id);
                return None;
            };
            match ActivationMail::from_body(&content.body) {
                Ok(mail) if mail.login == login => Some((item, mail)),
                Ok(_) => None,
                Err(e) => {
                    warn!("Could not decode body of message {}: {e}", item.id);
                    None
                }
            }
        })
    }
}
