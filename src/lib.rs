//! Hubs - a small REST API for managing hub records
//!
//! - `GET/POST /hubs`, `GET/PUT/PATCH/DELETE /hubs/:id`
//! - Pluggable storage through the [`db::HubStore`] trait
//! - In-memory or local filesystem persistence

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
