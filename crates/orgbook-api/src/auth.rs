//! `X-API-Key` header check.
//!
//! The key is a static shared secret from the server configuration; there
//! are no users or sessions. The check runs before any query-engine call.

use axum::{
  extract::FromRequestParts,
  http::{HeaderMap, request::Parts},
};
use orgbook_core::store::DirectoryStore;

use crate::{AppState, error::ApiError};

/// Name of the header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// The secret accepted as valid for this server instance.
#[derive(Clone)]
pub struct AuthConfig {
  pub api_key: String,
}

/// Zero-size marker: present in the handler means the request carried the
/// right key.
pub struct ApiKey;

/// Verify the key directly from headers.
pub fn verify_api_key(
  headers: &HeaderMap,
  config: &AuthConfig,
) -> Result<(), ApiError> {
  let supplied = headers
    .get(API_KEY_HEADER)
    .and_then(|v| v.to_str().ok())
    .ok_or(ApiError::Unauthorized)?;

  if supplied != config.api_key {
    return Err(ApiError::Unauthorized);
  }

  Ok(())
}

impl<S> FromRequestParts<AppState<S>> for ApiKey
where
  S: DirectoryStore + Clone + Send + Sync + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    verify_api_key(&parts.headers, &state.auth)?;
    Ok(ApiKey)
  }
}
