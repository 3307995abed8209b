//! Hub data access
//!
//! [`HubStore`] is the only thing the HTTP layer talks to. Absence of a
//! record is reported as `Ok(None)` / `Ok(false)`, never as an error, so
//! callers can tell "nothing there" apart from "could not ask".

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{StorageBackendKind, StorageSection};
use crate::storage::{create_storage, StorageConfig};
use crate::types::{Hub, HubFields, HubId};
use crate::Result;

pub mod memory;
pub mod object;

pub use memory::MemoryHubStore;
pub use object::ObjectHubStore;

/// Persistence operations for hubs
#[async_trait]
pub trait HubStore: Send + Sync {
    /// All hubs, ordered by id
    async fn list(&self) -> Result<Vec<Hub>>;

    /// Fetch a single hub
    async fn get_by_id(&self, id: HubId) -> Result<Option<Hub>>;

    /// Insert a new hub and return it with its assigned id
    async fn create(&self, fields: HubFields) -> Result<Hub>;

    /// Merge `changes` into an existing hub and return the updated record
    async fn update_by_id(&self, id: HubId, changes: HubFields) -> Result<Option<Hub>>;

    /// Remove a hub; `true` if a record was removed
    async fn delete_by_id(&self, id: HubId) -> Result<bool>;
}

/// Build the hub store described by the storage section of the config
pub async fn open_store(section: &StorageSection) -> Result<Arc<dyn HubStore>> {
    match section.backend {
        StorageBackendKind::Memory => {
            tracing::info!("Using in-memory hub store");
            Ok(Arc::new(MemoryHubStore::new()))
        }
        StorageBackendKind::Local => {
            let root_path = section.local.clone().unwrap_or_default().root_path;
            tracing::info!(path = %root_path, "Using local hub store");

            let backend = create_storage(StorageConfig::Local { root_path })?;
            let store = ObjectHubStore::open(Arc::from(backend)).await?;
            Ok(Arc::new(store))
        }
    }
}

/// Apply a change set on top of existing fields
pub(crate) fn merge_fields(fields: &mut HubFields, changes: HubFields) {
    for (key, value) in crate::types::strip_id(changes) {
        fields.insert(key, value);
    }
}
