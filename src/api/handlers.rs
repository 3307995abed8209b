//! API handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::api::error::NOT_FOUND_MESSAGE;
use crate::api::{ApiError, AppState};
use crate::types::{parse_hub_id, Hub, HubFields};

/// Greeting served on the root path
pub const ROOT_GREETING: &str = "Hello from the hubs API";

/// Liveness greeting served on `/hey`
pub const HEY_GREETING: &str = "hey there";

/// Body of every successful single-hub response
#[derive(Debug, Serialize)]
pub struct HubResponse {
    pub success: bool,
    pub hub: Hub,
}

impl HubResponse {
    fn ok(hub: Hub) -> Json<Self> {
        Json(Self { success: true, hub })
    }
}

pub async fn root() -> &'static str {
    ROOT_GREETING
}

pub async fn hey() -> &'static str {
    HEY_GREETING
}

pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// List every hub as a bare JSON array
pub async fn list_hubs(State(state): State<AppState>) -> Result<Json<Vec<Hub>>, ApiError> {
    let hubs = state.store.list().await?;
    Ok(Json(hubs))
}

/// Fetch one hub
pub async fn get_hub(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HubResponse>, ApiError> {
    let id = parse_hub_id(&id).ok_or(ApiError::NotFound)?;

    match state.store.get_by_id(id).await? {
        Some(hub) => Ok(HubResponse::ok(hub)),
        None => Err(ApiError::NotFound),
    }
}

/// Create a hub from the request body
pub async fn create_hub(
    State(state): State<AppState>,
    payload: Result<Json<HubFields>, JsonRejection>,
) -> Result<Response, ApiError> {
    let fields = read_body(payload)?;

    let hub = state.store.create(fields).await?;
    tracing::info!(id = hub.id, "Hub created");

    Ok((StatusCode::CREATED, HubResponse::ok(hub)).into_response())
}

/// Apply changes to a hub; serves both PUT and PATCH
pub async fn update_hub(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<HubFields>, JsonRejection>,
) -> Result<Json<HubResponse>, ApiError> {
    let id = parse_hub_id(&id).ok_or(ApiError::NotFound)?;

    // A missing target is reported before a bad body
    let changes = match read_body(payload) {
        Ok(changes) => changes,
        Err(err) => {
            return match state.store.get_by_id(id).await? {
                Some(_) => Err(err),
                None => Err(ApiError::NotFound),
            };
        }
    };

    match state.store.update_by_id(id, changes).await? {
        Some(hub) => Ok(HubResponse::ok(hub)),
        None => Err(ApiError::NotFound),
    }
}

/// Delete a hub
///
/// The 404 body here carries only the message, unlike the other endpoints.
pub async fn delete_hub(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let removed = match parse_hub_id(&id) {
        Some(id) => {
            let removed = state.store.delete_by_id(id).await?;
            if removed {
                tracing::info!(id, "Hub deleted");
            }
            removed
        }
        None => false,
    };

    if removed {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "message": NOT_FOUND_MESSAGE })),
        )
            .into_response())
    }
}

fn read_body(payload: Result<Json<HubFields>, JsonRejection>) -> Result<HubFields, ApiError> {
    payload
        .map(|Json(fields)| fields)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}
