//! API server state

use std::sync::Arc;

use crate::db::HubStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Hub storage shared by every request
    pub store: Arc<dyn HubStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn HubStore>) -> Self {
        Self { store }
    }
}
