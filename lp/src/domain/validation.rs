//! Field validation and normalization
//!
//! Applied to every value that reaches the registry, whether typed by the user
//! or supplied by a metadata lookup.

use thiserror::Error;
use url::Url;

/// Why a tool's fields were rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Tool name must not be empty")]
    EmptyName,

    #[error("Tool URL must not be empty")]
    EmptyUrl,

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Trim a display name, rejecting blank input
pub fn normalize_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

/// Trim a URL and make sure it carries an explicit `http://` or `https://` scheme
///
/// A bare host or path gets `https://` prepended, `//host` gets `https:`, and
/// an upper-case scheme is lowercased. Beyond the blank check, the result
/// must also parse as an absolute URL with a host: `exa mple.com`,
/// `localhost:abc` and `https://` are rejected with `InvalidUrl`.
///
/// The output is a fixed point (`normalize_url(out) == Ok(out)`), which is
/// what snapshot loading checks stored URLs against.
pub fn normalize_url(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    let normalized = if let Some(rest) = strip_prefix_ignore_case(trimmed, "https://") {
        format!("https://{}", rest)
    } else if let Some(rest) = strip_prefix_ignore_case(trimmed, "http://") {
        format!("http://{}", rest)
    } else if let Some(rest) = trimmed.strip_prefix("//") {
        format!("https://{}", rest)
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&normalized).map_err(|e| ValidationError::InvalidUrl {
        url: normalized.clone(),
        reason: e.to_string(),
    })?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::InvalidUrl {
            url: normalized,
            reason: "missing host".to_string(),
        });
    }

    Ok(normalized)
}

/// Trim an optional text field; blank becomes `None`
pub fn normalize_optional(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}
