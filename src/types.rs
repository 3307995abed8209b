//! Core types for hubs

use serde::{Deserialize, Serialize};

/// Hub identifier, assigned by the store on creation
pub type HubId = u64;

/// Free-form attributes of a hub (`name` and whatever else the caller sends)
pub type HubFields = serde_json::Map<String, serde_json::Value>;

/// Key reserved for the identifier; never stored inside `fields`
pub const ID_KEY: &str = "id";

/// A single hub record
///
/// Serialized flat, e.g. `{"id":1,"name":"Alpha"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hub {
    pub id: HubId,
    #[serde(flatten)]
    pub fields: HubFields,
}

impl Hub {
    pub fn new(id: HubId, fields: HubFields) -> Self {
        Self {
            id,
            fields: strip_id(fields),
        }
    }
}

/// Drop any caller-supplied `id` so storage stays the owner of identifiers.
pub fn strip_id(mut fields: HubFields) -> HubFields {
    fields.remove(ID_KEY);
    fields
}

/// Parse a path segment into a [`HubId`].
///
/// Anything that is not a plain unsigned integer can never name a record.
pub fn parse_hub_id(raw: &str) -> Option<HubId> {
    raw.trim().parse().ok()
}
