use crate::constants::{DEFAULT_DM_API_HOST, DEFAULT_MAILHOG_HOST};
use crate::model::retry::PollConfig;
use crate::utils::config::{get_env_or_default, load_dotenv};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Connection settings of one backend
///
/// Immutable once built: fields are private and the `with_*` methods consume
/// and return the value.
pub struct Configuration {
    host: String,
    headers: BTreeMap<String, String>,
    disable_log: bool,
}

impl Configuration {
    /// Creates a configuration for `host` with no extra headers and logging disabled
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            headers: BTreeMap::new(),
            disable_log: true,
        }
    }

    /// Adds a default header sent with every request
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds several default headers
    #[must_use]
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Turns request/response logging off (`true`) or on (`false`)
    #[must_use]
    pub fn with_disable_log(mut self, disable_log: bool) -> Self {
        self.disable_log = disable_log;
        self
    }

    /// Base URL
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Default headers
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Whether request/response logging is off
    pub fn disable_log(&self) -> bool {
        self.disable_log
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Settings for a complete test run
pub struct Config {
    /// DM account service
    pub account: Configuration,
    /// MailHog capture service
    pub mailhog: Configuration,
    /// Activation-token poll
    pub poll: PollConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from `.env` and the process environment
    ///
    /// | variable | default |
    /// |---|---|
    /// | `DM_API_HOST` | `http://5.63.153.31:5051` |
    /// | `DM_API_DISABLE_LOG` | `false` |
    /// | `MAILHOG_HOST` | `http://5.63.153.31:5025` |
    /// | `MAILHOG_DISABLE_LOG` | `true` |
    ///
    /// plus the poll variables read by [`PollConfig::from_env`].
    pub fn new() -> Self {
        load_dotenv();

        let account = Configuration::new(get_env_or_default(
            "DM_API_HOST",
            String::from(DEFAULT_DM_API_HOST),
        ))
        .with_disable_log(get_env_or_default("DM_API_DISABLE_LOG", false));

        let mailhog = Configuration::new(get_env_or_default(
            "MAILHOG_HOST",
            String::from(DEFAULT_MAILHOG_HOST),
        ))
        .with_disable_log(get_env_or_default("MAILHOG_DISABLE_LOG", true));

        let config = Config {
            account,
            mailhog,
            poll: PollConfig::from_env(),
        };
        debug!("Loaded configuration: {}", config);
        config
    }
}
