//! Hub store persisted as JSON objects in a [`StorageBackend`]
//!
//! Layout:
//! - `hubs/<id>.json` holds one record
//! - `hubs/_sequence` holds the highest id ever assigned, so ids of deleted
//!   hubs are not handed out again after a restart

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{merge_fields, HubStore};
use crate::storage::StorageBackend;
use crate::types::{strip_id, Hub, HubFields, HubId};
use crate::{Error, Result};

const HUBS_PREFIX: &str = "hubs";
const SEQUENCE_KEY: &str = "hubs/_sequence";

/// Hub store on top of an object storage backend
pub struct ObjectHubStore {
    storage: Arc<dyn StorageBackend>,
    /// Highest id assigned so far; also serializes all mutations
    last_id: Mutex<HubId>,
}

impl ObjectHubStore {
    /// Open a store, recovering the id sequence from what is already persisted
    pub async fn open(storage: Arc<dyn StorageBackend>) -> Result<Self> {
        let mut last_id = Self::load_sequence(storage.as_ref()).await?;

        for key in storage.list(HUBS_PREFIX).await? {
            if let Some(id) = Self::parse_key(&key) {
                last_id = last_id.max(id);
            }
        }

        tracing::info!(last_id, "Opened hub store");

        Ok(Self {
            storage,
            last_id: Mutex::new(last_id),
        })
    }

    fn hub_key(id: HubId) -> String {
        format!("{}/{}.json", HUBS_PREFIX, id)
    }

    fn parse_key(key: &str) -> Option<HubId> {
        key.strip_prefix(HUBS_PREFIX)?
            .strip_prefix('/')?
            .strip_suffix(".json")?
            .parse()
            .ok()
    }

    async fn load_sequence(storage: &dyn StorageBackend) -> Result<HubId> {
        if !storage.exists(SEQUENCE_KEY).await? {
            return Ok(0);
        }

        let data = storage.get(SEQUENCE_KEY).await?;
        let text = std::str::from_utf8(&data)
            .map_err(|e| Error::storage(format!("Invalid UTF-8 in sequence: {}", e)))?;
        text.trim()
            .parse()
            .map_err(|e| Error::storage(format!("Corrupt hub sequence '{}': {}", text.trim(), e)))
    }

    async fn read(&self, id: HubId) -> Result<Option<Hub>> {
        // Readers do not take the lock, so the object may vanish at any point
        let data = match self.storage.get(&Self::hub_key(id)).await {
            Ok(data) => data,
            Err(Error::ObjectNotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        let hub: Hub = serde_json::from_slice(&data)?;
        Ok(Some(hub))
    }

    async fn write(&self, hub: &Hub) -> Result<()> {
        let data = serde_json::to_vec(hub)?;
        self.storage
            .put(&Self::hub_key(hub.id), Bytes::from(data))
            .await
    }
}

#[async_trait]
impl HubStore for ObjectHubStore {
    async fn list(&self) -> Result<Vec<Hub>> {
        let mut ids: Vec<HubId> = self
            .storage
            .list(HUBS_PREFIX)
            .await?
            .iter()
            .filter_map(|key| Self::parse_key(key))
            .collect();
        ids.sort_unstable();

        let mut hubs = Vec::with_capacity(ids.len());
        for id in ids {
            // Deleted between list and read
            if let Some(hub) = self.read(id).await? {
                hubs.push(hub);
            }
        }

        Ok(hubs)
    }

    async fn get_by_id(&self, id: HubId) -> Result<Option<Hub>> {
        self.read(id).await
    }

    async fn create(&self, fields: HubFields) -> Result<Hub> {
        let mut last_id = self.last_id.lock().await;
        let id = *last_id + 1;

        self.storage
            .put(SEQUENCE_KEY, Bytes::from(id.to_string()))
            .await?;
        *last_id = id;

        let hub = Hub::new(id, strip_id(fields));
        self.write(&hub).await?;
        tracing::debug!(id, "Created hub");

        Ok(hub)
    }

    async fn update_by_id(&self, id: HubId, changes: HubFields) -> Result<Option<Hub>> {
        let _guard = self.last_id.lock().await;

        let Some(mut hub) = self.read(id).await? else {
            return Ok(None);
        };

        merge_fields(&mut hub.fields, changes);
        self.write(&hub).await?;

        Ok(Some(hub))
    }

    async fn delete_by_id(&self, id: HubId) -> Result<bool> {
        let _guard = self.last_id.lock().await;

        let key = Self::hub_key(id);
        if !self.storage.exists(&key).await? {
            return Ok(false);
        }

        self.storage.delete(&key).await?;
        Ok(true)
    }
}
