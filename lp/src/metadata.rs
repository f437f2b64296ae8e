//! Metadata lookup for auto-filling new tools
//!
//! A lookup turns a URL into best-effort title/description/icon hints. The
//! hints only fill fields the user left blank, and the filled draft still goes
//! through normal registry validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::domain::ToolDraft;
use crate::domain::validation::{ValidationError, normalize_url};

/// Errors from a metadata lookup
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error(transparent)]
    InvalidUrl(#[from] ValidationError),

    #[error("Metadata lookup failed: {0}")]
    Lookup(String),
}

/// Best-effort page metadata; any field may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub favicon: Option<String>,
    pub thumbnail: Option<String>,
}

impl Metadata {
    /// Fill blank draft fields from this metadata; user input always wins
    pub fn fill(self, mut draft: ToolDraft) -> ToolDraft {
        if draft.name.trim().is_empty()
            && let Some(title) = self.title
        {
            draft.name = title;
        }
        fill_blank(&mut draft.description, self.description);
        fill_blank(&mut draft.favicon, self.favicon);
        fill_blank(&mut draft.thumbnail, self.thumbnail);
        draft
    }
}

fn fill_blank(field: &mut Option<String>, value: Option<String>) {
    let blank = field.as_deref().is_none_or(|s| s.trim().is_empty());
    if blank && value.is_some() {
        *field = value;
    }
}

/// Source of page metadata for a URL
pub trait MetadataLookup {
    fn lookup(&self, url: &str) -> Result<Metadata, MetadataError>;
}

/// Offline lookup that derives metadata from the URL's host
///
/// `https://www.figma.com/files` gives title `Figma` and favicon
/// `https://www.figma.com/favicon.ico`. No request is made.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostMetadata;

impl MetadataLookup for HostMetadata {
    fn lookup(&self, url: &str) -> Result<Metadata, MetadataError> {
        let normalized = normalize_url(url)?;
        let parsed = Url::parse(&normalized).map_err(|e| MetadataError::Lookup(e.to_string()))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| MetadataError::Lookup(format!("no host in {}", normalized)))?;

        let metadata = Metadata {
            title: title_from_host(host),
            description: None,
            favicon: Some(format!("{}/favicon.ico", parsed.origin().ascii_serialization())),
            thumbnail: None,
        };
        debug!(url = %normalized, ?metadata, "HostMetadata::lookup: derived");
        Ok(metadata)
    }
}

/// `www.figma.com` -> `Figma`, `docs.rs` -> `Docs`
fn title_from_host(host: &str) -> Option<String> {
    let host = host.strip_prefix("www.").unwrap_or(host);
    let label = host.split('.').find(|part| !part.is_empty())?;
    let mut chars = label.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
