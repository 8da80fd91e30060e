//! Item data model
//!
//! Items are owned by the external backend; the core only reads them.

use crate::error::SnipError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of stored entry
///
/// Unrecognized wire values are kept as [`ItemType::Other`] instead of being
/// rejected, so a snapshot with an unexpected type still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    /// Free-form note
    #[default]
    Note,
    /// Shell command
    Shell,
    /// Code snippet
    Snippet,
    /// Configuration file or fragment
    Config,
    /// Any type the backend reports that is not one of the above
    Other(String),
}

impl ItemType {
    /// The known types, in legend order
    pub const KNOWN: [ItemType; 4] = [
        ItemType::Note,
        ItemType::Shell,
        ItemType::Snippet,
        ItemType::Config,
    ];

    /// All valid type names accepted on the command line
    pub const VALID_TYPES: &'static [&'static str] = &["note", "shell", "snippet", "config"];

    /// Wire name of the type
    pub fn as_str(&self) -> &str {
        match self {
            ItemType::Note => "note",
            ItemType::Shell => "shell",
            ItemType::Snippet => "snippet",
            ItemType::Config => "config",
            ItemType::Other(name) => name,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &str {
        match self {
            ItemType::Note => "Note",
            ItemType::Shell => "Shell Command",
            ItemType::Snippet => "Code Snippet",
            ItemType::Config => "Configuration",
            ItemType::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ItemType::Other(_))
    }
}

impl From<String> for ItemType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "note" => ItemType::Note,
            "shell" => ItemType::Shell,
            "snippet" => ItemType::Snippet,
            "config" => ItemType::Config,
            _ => ItemType::Other(s),
        }
    }
}

impl From<ItemType> for String {
    fn from(t: ItemType) -> Self {
        t.as_str().to_string()
    }
}

impl FromStr for ItemType {
    type Err = SnipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "note" => Ok(ItemType::Note),
            "shell" => Ok(ItemType::Shell),
            "snippet" => Ok(ItemType::Snippet),
            "config" => Ok(ItemType::Config),
            other => Err(SnipError::UsageError(format!(
                "unknown item type: {} (expected: {})",
                other,
                Self::VALID_TYPES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored snippet, note, command or configuration entry
///
/// Missing or `null` text fields deserialize as empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub item_type: ItemType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub folder: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub modified: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Tag list where a `null` list or `null` entries are dropped
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(tags.into_iter().flatten().flatten().collect())
}

impl Item {
    /// Create an item with an id, title and content; everything else empty
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, item_type: ItemType) -> Self {
        self.item_type = item_type;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }
}

/// Payload for the backend `create_item` command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateItemInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: String,
}

/// Payload for the backend `update_item` command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateItemInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// AI provider settings as reported by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    pub provider: String,
    pub model: String,
    pub base_url: String,
    pub has_api_key: bool,
    pub is_configured: bool,
}

/// Payload for the backend `set_ai_settings` command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSettingsInput {
    pub provider: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}
