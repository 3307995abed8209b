//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Message returned whenever an id does not name a stored hub
pub const NOT_FOUND_MESSAGE: &str = "id not found";

/// Failure outcomes of a hub request
#[derive(Debug)]
pub enum ApiError {
    /// The store answered, but no record matched
    NotFound,
    /// The request body could not be read as a JSON object
    BadRequest(String),
    /// The store could not carry out the operation
    Storage(crate::Error),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<crate::Error> for ApiError {
    fn from(err: crate::Error) -> Self {
        ApiError::Storage(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::NotFound => json!({
                "success": false,
                "message": NOT_FOUND_MESSAGE,
            }),
            ApiError::BadRequest(message) => json!({
                "success": false,
                "message": message,
            }),
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "Hub storage operation failed");
                json!({
                    "success": false,
                    "err": err.to_string(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}
