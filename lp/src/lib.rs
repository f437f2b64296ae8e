//! Launchpad - personal tool launcher
//!
//! Keeps a registry of shortcuts ("tools") to web destinations, files them by
//! category, searches them, and opens them in the browser.
//!
//! # Architecture
//!
//! ```text
//! ~/.local/share/launchpad/
//! └── tools.json      # whole-collection snapshot, rewritten on every change
//! ```
//!
//! # Modules
//!
//! - [`domain`] - Tool, Category, drafts/patches, validation
//! - [`registry`] - owned tool collection mirrored to a [`keystore::Storage`]
//! - [`filter`] - category filter and text search
//! - [`metadata`] - auto-fill hints for new tools
//! - [`launcher`] - opening a tool's URL
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface
//!
//! # Example
//!
//! ```ignore
//! use keystore::FileStorage;
//! use launchpad::{CategoryFilter, Registry, ToolDraft, filter};
//!
//! let (mut registry, _) = Registry::load(FileStorage::open("~/.local/share/launchpad")?);
//! registry.create(ToolDraft::new("Figma", "figma.com"))?;
//! let hits = filter::search(registry.tools(), "fig", CategoryFilter::All);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod filter;
pub mod launcher;
pub mod metadata;
pub mod registry;

pub use config::Config;
pub use domain::{Category, CategoryFilter, ICON_PALETTE, Tool, ToolDraft, ToolId, ToolPatch, ValidationError};
pub use filter::{category_counts, filter_by_category, search};
pub use launcher::{LaunchError, Launcher, SystemLauncher, open_tool};
pub use metadata::{HostMetadata, Metadata, MetadataError, MetadataLookup};
pub use registry::{LoadOutcome, Mutation, PersistError, Registry, RegistryError, ResolveError, SnapshotError};
