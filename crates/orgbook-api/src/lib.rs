//! JSON HTTP surface for the orgbook directory.
//!
//! Exposes an axum [`Router`] backed by any
//! [`DirectoryStore`](orgbook_core::store::DirectoryStore), gated by a
//! static `X-API-Key` shared secret. Transport and TLS are the caller's
//! responsibility.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod seed;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use orgbook_core::{directory::Directory, store::DirectoryStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use auth::AuthConfig;
use handlers::{activities, buildings, docs, organizations};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `orgbook.toml` and the
/// `ORGBOOK_*` environment. Every field has a default, so the server runs
/// with no config file at all.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  /// Shared secret expected in the `X-API-Key` header.
  #[serde(default = "default_api_key")]
  pub api_key:    String,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  8000
}

fn default_store_path() -> PathBuf {
  PathBuf::from("data/orgbook.sqlite")
}

fn default_api_key() -> String {
  "SECRET_KEY123".to_string()
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: DirectoryStore> {
  pub directory: Arc<Directory<S>>,
  pub auth:      Arc<AuthConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the directory API.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: DirectoryStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(docs::root_redirect))
    .route("/api/docs", get(docs::endpoint_reference))
    .route(
      "/buildings/{building_id}/organizations",
      get(buildings::organizations::<S>),
    )
    .route(
      "/activities/{activity_id}/organizations",
      get(activities::organizations::<S>),
    )
    .route("/organizations/nearby", get(organizations::nearby::<S>))
    .route(
      "/organizations/search/activity",
      get(organizations::search_by_activity::<S>),
    )
    .route(
      "/organizations/search/name",
      get(organizations::search_by_name::<S>),
    )
    .route("/organizations/{org_id}", get(organizations::get_one::<S>))
    .route("/organizations/", post(organizations::create::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
