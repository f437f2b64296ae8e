//! Registry - owns the tool collection and its storage slot

use keystore::Storage;
use tracing::{debug, info, warn};

use crate::domain::{Tool, ToolDraft, ToolId, ToolPatch, now_ms};

use super::error::{PersistError, RegistryError, ResolveError, SnapshotError};
use super::resolve::resolve;
use super::snapshot::{decode, encode};

/// Storage key used when none is configured
pub const DEFAULT_KEY: &str = "tools";

/// What [`Registry::load`] found in storage
#[derive(Debug)]
pub enum LoadOutcome {
    /// Nothing stored yet
    Empty,
    /// A valid snapshot with this many tools
    Loaded(usize),
    /// The stored snapshot was unusable and was ignored
    Discarded(SnapshotError),
}

/// Result of a mutation plus the outcome of the persist that followed it
///
/// The mutation has already happened in memory either way; a failed persist
/// only means the durable copy is stale until the next successful one.
#[derive(Debug)]
#[must_use]
pub struct Mutation<T> {
    pub value: T,
    pub persisted: Result<(), PersistError>,
}

impl<T> Mutation<T> {
    pub fn is_persisted(&self) -> bool {
        self.persisted.is_ok()
    }

    /// The persist failure, if any
    pub fn warning(&self) -> Option<&PersistError> {
        self.persisted.as_ref().err()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// The tool collection for one session, mirrored to a storage slot
///
/// The only way to obtain a registry is [`Registry::load`], so every mutation
/// happens after the stored snapshot has been read.
#[derive(Debug)]
pub struct Registry<S: Storage> {
    storage: S,
    key: String,
    tools: Vec<Tool>,
}

impl<S: Storage> Registry<S> {
    /// Load the registry from the default storage key
    pub fn load(storage: S) -> (Self, LoadOutcome) {
        Self::load_with_key(storage, DEFAULT_KEY)
    }

    /// Load the registry from `key`
    ///
    /// Never fails: an absent, unreadable or invalid snapshot yields an empty
    /// registry. Tools are cheap to re-add; refusing to start is worse.
    pub fn load_with_key(storage: S, key: impl Into<String>) -> (Self, LoadOutcome) {
        let key = key.into();
        debug!(%key, "load: called");

        let (tools, outcome) = match storage.read(&key) {
            Ok(None) => (Vec::new(), LoadOutcome::Empty),
            Ok(Some(raw)) if raw.trim().is_empty() => (Vec::new(), LoadOutcome::Empty),
            Ok(Some(raw)) => match decode(&raw) {
                Ok(tools) => {
                    let count = tools.len();
                    (tools, LoadOutcome::Loaded(count))
                }
                Err(e) => {
                    warn!(%key, error = %e, "Discarding stored snapshot");
                    (Vec::new(), LoadOutcome::Discarded(e))
                }
            },
            Err(e) => {
                warn!(%key, error = %e, "Storage unreadable, starting empty");
                (Vec::new(), LoadOutcome::Discarded(SnapshotError::Unreadable(e)))
            }
        };

        info!(%key, count = tools.len(), "Registry loaded");
        (Self { storage, key, tools }, outcome)
    }

    /// All tools in insertion order
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn get(&self, id: &ToolId) -> Option<&Tool> {
        self.tools.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Storage key this registry persists to
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Find the one tool a user reference names (id, id prefix, or name)
    pub fn resolve(&self, reference: &str) -> Result<&Tool, ResolveError> {
        resolve(&self.tools, reference)
    }

    /// Validate a draft, assign id and timestamp, append, and persist
    pub fn create(&mut self, draft: ToolDraft) -> Result<Mutation<Tool>, RegistryError> {
        debug!(name = %draft.name, url = %draft.url, "create: called");
        let tool = draft.into_tool(self.fresh_id(), now_ms())?;

        info!(id = %tool.id, name = %tool.name, category = %tool.category, "Created tool");
        self.tools.push(tool.clone());
        let persisted = self.persist();
        Ok(Mutation { value: tool, persisted })
    }

    /// Merge `patch` into the tool with `id`, and persist
    ///
    /// `id` and `created_at` never change. An invalid patch leaves the tool
    /// untouched and nothing is persisted.
    pub fn update(&mut self, id: &ToolId, patch: ToolPatch) -> Result<Mutation<Tool>, RegistryError> {
        debug!(%id, "update: called");
        let tool = self
            .tools
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;

        tool.apply(patch)?;
        let updated = tool.clone();

        info!(%id, name = %updated.name, "Updated tool");
        let persisted = self.persist();
        Ok(Mutation {
            value: updated,
            persisted,
        })
    }

    /// Remove the tool with `id` if present, and persist
    ///
    /// Deleting an unknown id is not an error; the removed tool is returned
    /// when there was one.
    pub fn delete(&mut self, id: &ToolId) -> Mutation<Option<Tool>> {
        debug!(%id, "delete: called");
        let removed = self
            .tools
            .iter()
            .position(|t| &t.id == id)
            .map(|index| self.tools.remove(index));

        match &removed {
            Some(tool) => info!(%id, name = %tool.name, "Deleted tool"),
            None => debug!(%id, "delete: no such tool"),
        }
        let persisted = self.persist();
        Mutation {
            value: removed,
            persisted,
        }
    }

    /// Remove every tool, and persist the empty collection
    pub fn clear(&mut self) -> Mutation<usize> {
        let removed = self.tools.len();
        self.tools.clear();
        info!(removed, "Cleared registry");
        let persisted = self.persist();
        Mutation {
            value: removed,
            persisted,
        }
    }

    /// Overwrite the storage slot with the whole current collection
    pub fn persist(&mut self) -> Result<(), PersistError> {
        let raw = encode(&self.tools)?;
        match self.storage.write(&self.key, &raw) {
            Ok(()) => {
                debug!(key = %self.key, count = self.tools.len(), "persist: snapshot written");
                Ok(())
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Persist failed, in-memory state kept");
                Err(e.into())
            }
        }
    }

    fn fresh_id(&self) -> ToolId {
        loop {
            let id = ToolId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
