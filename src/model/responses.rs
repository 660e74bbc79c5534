/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use chrono::{DateTime, NaiveDateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Not logged in
    Guest,
    /// Regular player
    Player,
    /// Site administrator
    Administrator,
    /// Moderator of the nanny section
    NannyModerator,
    /// Regular moderator
    RegularModerator,
    /// Senior moderator
    SeniorModerator,
}

/// User rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Whether the rating is shown
    pub enabled: bool,
    /// Quality score
    pub quality: i64,
    /// Quantity score
    pub quantity: i64,
}

/// Basic user information returned by login, activation and password endpoints
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User login
    pub login: String,
    /// Granted roles
    pub roles: Vec<UserRole>,
    /// Medium avatar URL
    #[serde(rename = "mediumPictureUrl")]
    pub medium_picture_url: Option<String>,
    /// Small avatar URL
    #[serde(rename = "smallPictureUrl")]
    pub small_picture_url: Option<String>,
    /// Status line
    pub status: Option<String>,
    /// Rating
    pub rating: Rating,
    /// Last activity
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub online: Option<DateTime<Utc>>,
    /// Display name
    pub name: Option<String>,
    /// Location
    pub location: Option<String>,
    /// Registration date
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub registration: Option<DateTime<Utc>>,
}

/// Envelope around [`User`]
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEnvelope {
    /// The user
    pub resource: Option<User>,
    /// Free-form metadata
    pub metadata: Option<Value>,
}

/// Interface colour schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSchema {
    /// Modern
    Modern,
    /// Pale
    Pale,
    /// Classic
    Classic,
    /// Classic pale
    ClassicPale,
    /// Night
    Night,
}

/// BB-code parse modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BbParseMode {
    /// Common
    Common,
    /// Info
    Info,
    /// Post
    Post,
    /// Chat
    Chat,
}

/// BB-code text with its parse mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoBbText {
    /// Text
    pub value: Option<String>,
    /// Parse mode
    #[serde(rename = "parseMode")]
    pub parse_mode: Option<BbParseMode>,
}

/// Page sizes per content type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PagingSettings {
    /// Posts per page
    #[serde(rename = "postsPerPage")]
    pub posts_per_page: i32,
    /// Comments per page
    #[serde(rename = "commentsPerPage")]
    pub comments_per_page: i32,
    /// Topics per page
    #[serde(rename = "topicsPerPage")]
    pub topics_per_page: i32,
    /// Messages per page
    #[serde(rename = "messagesPerPage")]
    pub messages_per_page: i32,
    /// Entities per page
    #[serde(rename = "entitiesPerPage")]
    pub entities_per_page: i32,
}

/// Personal settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserSettings {
    /// Colour scheme
    #[serde(rename = "colorSchema")]
    pub color_schema: Option<ColorSchema>,
    /// Greeting shown by the nanny
    #[serde(rename = "nannyGreetingsMessage")]
    pub nanny_greetings_message: Option<String>,
    /// Paging settings
    pub paging: Option<PagingSettings>,
}

/// Full user profile returned by `GET /v1/account`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserDetails {
    /// User login
    pub login: String,
    /// Granted roles
    pub roles: Vec<UserRole>,
    /// Medium avatar URL
    #[serde(rename = "mediumPictureUrl")]
    pub medium_picture_url: Option<String>,
    /// Small avatar URL
    #[serde(rename = "smallPictureUrl")]
    pub small_picture_url: Option<String>,
    /// Status line
    pub status: Option<String>,
    /// Rating
    pub rating: Rating,
    /// Last activity
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub online: DateTime<Utc>,
    /// Display name
    pub name: Option<String>,
    /// Location
    pub location: Option<String>,
    /// Registration date
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub registration: DateTime<Utc>,
    /// ICQ number
    pub icq: Option<String>,
    /// Skype login
    pub skype: Option<String>,
    /// Original avatar URL
    #[serde(rename = "originalPictureUrl")]
    pub original_picture_url: Option<String>,
    /// Profile text; usually an [`InfoBbText`]
    pub info: Option<Value>,
    /// Personal settings
    pub settings: UserSettings,
}

impl UserDetails {
    /// Decodes `info` as BB-code text when it has that shape
    #[must_use]
    pub fn info_bb_text(&self) -> Option<InfoBbText> {
        self.info
            .as_ref()
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

/// Envelope around [`UserDetails`]
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserDetailsEnvelope {
    /// The profile
    pub resource: Option<UserDetails>,
    /// Metadata string
    pub metadata: Option<String>,
}

/// Parses an RFC 3339 timestamp, or one without an offset (taken as UTC)
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_timestamp(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {value}")))
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) => parse_timestamp(&value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {value}"))),
        None => Ok(None),
    }
}
