//! Tool registry
//!
//! Owns the in-memory tool collection for a session and mirrors it to a
//! [`keystore::Storage`] slot as one JSON snapshot, rewritten after every
//! mutation.

mod error;
mod resolve;
mod snapshot;
mod store;

pub use error::{PersistError, RegistryError, ResolveError, SnapshotError};
pub use resolve::resolve;
pub use snapshot::{decode, encode};
pub use store::{DEFAULT_KEY, LoadOutcome, Mutation, Registry};
