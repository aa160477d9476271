//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Missing or mismatched `X-API-Key`.
  #[error("invalid API key")]
  Unauthorized,

  #[error("not found: {0}")]
  NotFound(String),

  #[error("engine error: {0}")]
  Engine(#[source] orgbook_core::Error),
}

impl From<orgbook_core::Error> for ApiError {
  fn from(err: orgbook_core::Error) -> Self {
    match err {
      orgbook_core::Error::OrganizationNotFound(id) => {
        ApiError::NotFound(format!("organization {id} not found"))
      }
      other => ApiError::Engine(other),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::Unauthorized => (StatusCode::FORBIDDEN, self.to_string()),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Engine(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
