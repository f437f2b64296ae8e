//! Resolve a user-typed reference to a single tool
//!
//! A reference matches a tool by exact id, by id prefix, or by name
//! (case-insensitive, whole name).

use crate::domain::Tool;

use super::error::ResolveError;

/// Find the one tool a reference names
///
/// An exact id match always wins. Otherwise every id-prefix and name match is
/// collected; more than one is ambiguous.
pub fn resolve<'a>(tools: &'a [Tool], reference: &str) -> Result<&'a Tool, ResolveError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(ResolveError::NotFound(reference.to_string()));
    }

    if let Some(tool) = tools.iter().find(|t| t.id.as_str() == reference) {
        return Ok(tool);
    }

    let wanted = reference.to_lowercase();
    let matches: Vec<&Tool> = tools
        .iter()
        .filter(|t| t.id.as_str().starts_with(reference) || t.name.to_lowercase() == wanted)
        .collect();

    match matches.as_slice() {
        [] => Err(ResolveError::NotFound(reference.to_string())),
        [tool] => Ok(tool),
        _ => Err(ResolveError::Ambiguous {
            reference: reference.to_string(),
            candidates: matches
                .iter()
                .map(|t| format!("{} ({})", t.name, t.id.short()))
                .collect(),
        }),
    }
}
