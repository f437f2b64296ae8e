//! Tool record, creation draft, and partial update

use serde::{Deserialize, Deserializer, Serialize};

use super::category::Category;
use super::id::ToolId;
use super::validation::{ValidationError, normalize_name, normalize_optional, normalize_url};

/// A launchable shortcut to an external destination
///
/// Serialized with camelCase field names; absent optional fields are omitted
/// on write and `null` is accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Unique identifier, assigned by the registry
    pub id: ToolId,

    /// Display label, never blank
    pub name: String,

    /// Destination, always with an explicit http(s) scheme
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Small icon address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,

    /// Preview image address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Single-glyph icon; shown instead of the favicon when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    pub category: Category,

    /// Creation timestamp (Unix milliseconds)
    #[serde(default)]
    pub created_at: i64,
}

impl Tool {
    /// Icon to display: the emoji override, else the category glyph
    pub fn icon(&self) -> &str {
        self.emoji.as_deref().unwrap_or_else(|| self.category.glyph())
    }

    /// Apply a patch, validating `name` and `url` if present
    ///
    /// Nothing is changed unless the whole patch is valid.
    pub fn apply(&mut self, patch: ToolPatch) -> Result<(), ValidationError> {
        let name = patch.name.as_deref().map(normalize_name).transpose()?;
        let url = patch.url.as_deref().map(normalize_url).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(description) = patch.description {
            self.description = normalize_optional(description);
        }
        if let Some(favicon) = patch.favicon {
            self.favicon = normalize_optional(favicon);
        }
        if let Some(thumbnail) = patch.thumbnail {
            self.thumbnail = normalize_optional(thumbnail);
        }
        if let Some(emoji) = patch.emoji {
            self.emoji = normalize_optional(emoji);
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        Ok(())
    }
}

/// A tool as entered by the user, before the registry assigns id and timestamp
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolDraft {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub favicon: Option<String>,
    pub thumbnail: Option<String>,
    pub emoji: Option<String>,
    /// Falls back to [`Category::default`] when not chosen
    pub category: Option<Category>,
}

impl ToolDraft {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn with_favicon(mut self, favicon: impl Into<String>) -> Self {
        self.favicon = Some(favicon.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Validate and normalize into a full tool with the given identity
    pub fn into_tool(self, id: ToolId, created_at: i64) -> Result<Tool, ValidationError> {
        Ok(Tool {
            id,
            name: normalize_name(&self.name)?,
            url: normalize_url(&self.url)?,
            description: normalize_optional(self.description),
            favicon: normalize_optional(self.favicon),
            thumbnail: normalize_optional(self.thumbnail),
            emoji: normalize_optional(self.emoji),
            category: self.category.unwrap_or_default(),
            created_at,
        })
    }
}

/// Partial update for an existing tool
///
/// `None` leaves a field unchanged. Optional fields take `Some(None)` to clear
/// them; in JSON that is an explicit `null`. `id` and `createdAt` are not part
/// of a patch and are ignored when present in JSON input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolPatch {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub favicon: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub thumbnail: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub emoji: Option<Option<String>>,

    #[serde(default)]
    pub category: Option<Category>,
}

impl ToolPatch {
    /// True if the patch would change nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Distinguish an explicit `null` (clear) from a missing field (keep)
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
