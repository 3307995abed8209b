//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::db::HubStore;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/hey", get(handlers::hey))
        .route("/favicon.ico", get(handlers::favicon))
        .route("/hubs", get(handlers::list_hubs).post(handlers::create_hub))
        .route(
            "/hubs/:id",
            get(handlers::get_hub)
                .put(handlers::update_hub)
                .patch(handlers::update_hub)
                .delete(handlers::delete_hub),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper wiring a store straight into a router
pub fn create_store_router(store: Arc<dyn HubStore>) -> Router {
    create_router(AppState::new(store))
}
