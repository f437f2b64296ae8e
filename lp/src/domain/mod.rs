//! Domain types for Launchpad
//!
//! Core types: Tool, ToolDraft, ToolPatch, Category, CategoryFilter.
//! Static reference data (category labels/glyphs, the icon palette) lives
//! here too and is not user-editable.

mod category;
mod icons;
mod id;
mod tool;
pub mod validation;

pub use category::{Category, CategoryFilter};
pub use icons::ICON_PALETTE;
pub use id::ToolId;
pub use tool::{Tool, ToolDraft, ToolPatch};
pub use validation::ValidationError;

/// Current time as Unix milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
