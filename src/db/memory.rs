//! In-memory hub store

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{merge_fields, HubStore};
use crate::types::{strip_id, Hub, HubFields, HubId};
use crate::Result;

#[derive(Default)]
struct Inner {
    hubs: BTreeMap<HubId, HubFields>,
    last_id: HubId,
}

/// Hub store kept entirely in process memory. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryHubStore {
    inner: RwLock<Inner>,
}

impl MemoryHubStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored hubs
    pub async fn len(&self) -> usize {
        self.inner.read().await.hubs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl HubStore for MemoryHubStore {
    async fn list(&self) -> Result<Vec<Hub>> {
        let inner = self.inner.read().await;
        Ok(inner
            .hubs
            .iter()
            .map(|(id, fields)| Hub::new(*id, fields.clone()))
            .collect())
    }

    async fn get_by_id(&self, id: HubId) -> Result<Option<Hub>> {
        let inner = self.inner.read().await;
        Ok(inner
            .hubs
            .get(&id)
            .map(|fields| Hub::new(id, fields.clone())))
    }

    async fn create(&self, fields: HubFields) -> Result<Hub> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;

        let fields = strip_id(fields);
        inner.hubs.insert(id, fields.clone());
        tracing::debug!(id, "Created hub");

        Ok(Hub::new(id, fields))
    }

    async fn update_by_id(&self, id: HubId, changes: HubFields) -> Result<Option<Hub>> {
        let mut inner = self.inner.write().await;
        let Some(fields) = inner.hubs.get_mut(&id) else {
            return Ok(None);
        };

        merge_fields(fields, changes);
        Ok(Some(Hub::new(id, fields.clone())))
    }

    async fn delete_by_id(&self, id: HubId) -> Result<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.hubs.remove(&id).is_some())
    }
}
