use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a post on the platform.
///
/// Streams send ids either as JSON strings or as integers; both deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostId(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(id) => id,
            RawId::Unsigned(id) => id.to_string(),
            RawId::Signed(id) => id.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
    }
}

fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(String::from)
}

fn optional_id_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub screen_name: String,
}

/// An inbound post delivered by the status stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceEvent {
    pub id: PostId,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub is_retweet: bool,
    #[serde(default, deserialize_with = "optional_id_string")]
    pub in_reply_to_status_id: Option<String>,
    #[serde(default, deserialize_with = "optional_id_string")]
    pub in_reply_to_user_id: Option<String>,
    #[serde(default)]
    pub in_reply_to_screen_name: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub urls: Vec<String>,
}

impl SourceEvent {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: PostId::new(id),
            author: Author::default(),
            is_retweet: false,
            in_reply_to_status_id: None,
            in_reply_to_user_id: None,
            in_reply_to_screen_name: None,
            text: text.into(),
            urls: Vec::new(),
        }
    }

    /// Only the first embedded link is ever converted.
    pub fn first_url(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }

    /// Author handle as it appears in a mention, e.g. `@rustlang`.
    pub fn author_handle(&self) -> String {
        format!("@{}", self.author.screen_name)
    }
}
