//! Registry error types

use keystore::StorageError;
use thiserror::Error;

use crate::domain::{ToolId, ValidationError};

/// Errors from registry mutations
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Tool not found: {0}")]
    NotFound(ToolId),
}

/// The snapshot could not be written; in-memory state is unaffected
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Storage write failed: {0}")]
    StorageWriteFailed(#[from] StorageError),

    #[error("Failed to serialize tools: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Why a stored snapshot was discarded at load time
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Storage unreadable: {0}")]
    Unreadable(#[source] StorageError),

    #[error("Malformed snapshot: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Duplicate tool id in snapshot: {0}")]
    DuplicateId(ToolId),

    #[error("Tool {id} has a blank {field}")]
    BlankField { id: ToolId, field: &'static str },

    #[error("Tool {id} has an invalid url '{url}'")]
    InvalidUrl { id: ToolId, url: String },
}

/// A user reference did not name exactly one tool
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No tool matches '{0}'")]
    NotFound(String),

    #[error("'{reference}' matches {} tools: {}", .candidates.len(), .candidates.join(", "))]
    Ambiguous { reference: String, candidates: Vec<String> },
}
