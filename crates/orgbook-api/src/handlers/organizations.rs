//! Handlers for `/organizations` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/organizations/nearby` | `lat`, `lon` required; `radius` defaults to 1000 m |
//! | `GET`  | `/organizations/:id` | 404 if not found |
//! | `GET`  | `/organizations/search/activity` | Subtree search by root-activity name |
//! | `GET`  | `/organizations/search/name` | Case-insensitive substring |
//! | `POST` | `/organizations/` | Body: `{name, building_id, phones, activity_ids}` |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use orgbook_core::{
  geo::GeoPoint,
  organization::{NewOrganization, Organization, OrganizationId},
  store::DirectoryStore,
};
use serde::Deserialize;

use crate::{AppState, auth::ApiKey, error::ApiError};

// ─── Nearby ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NearbyParams {
  pub lat: f64,
  pub lon: f64,
  /// Radius in meters.
  #[serde(default = "default_radius")]
  pub radius: f64,
}

fn default_radius() -> f64 {
  1000.0
}

/// `GET /organizations/nearby?lat=<f64>&lon=<f64>[&radius=<f64>]`
pub async fn nearby<S>(
  _: ApiKey,
  State(state): State<AppState<S>>,
  Query(params): Query<NearbyParams>,
) -> Result<Json<Vec<Organization>>, ApiError>
where
  S: DirectoryStore + Clone + Send + Sync + 'static,
{
  let center = GeoPoint { latitude: params.lat, longitude: params.lon };
  let orgs = state
    .directory
    .organizations_within_radius(center, params.radius)
    .await?;
  Ok(Json(orgs))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /organizations/:org_id`
pub async fn get_one<S>(
  _: ApiKey,
  State(state): State<AppState<S>>,
  Path(org_id): Path<OrganizationId>,
) -> Result<Json<Organization>, ApiError>
where
  S: DirectoryStore + Clone + Send + Sync + 'static,
{
  let org = state.directory.organization_by_id(org_id).await?;
  Ok(Json(org))
}

// ─── Search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ActivitySearchParams {
  pub activity_name: String,
}

/// `GET /organizations/search/activity?activity_name=<substring>`
pub async fn search_by_activity<S>(
  _: ApiKey,
  State(state): State<AppState<S>>,
  Query(params): Query<ActivitySearchParams>,
) -> Result<Json<Vec<Organization>>, ApiError>
where
  S: DirectoryStore + Clone + Send + Sync + 'static,
{
  let orgs = state
    .directory
    .search_by_activity_tree(&params.activity_name)
    .await?;
  Ok(Json(orgs))
}

#[derive(Debug, Deserialize)]
pub struct NameSearchParams {
  pub name: String,
}

/// `GET /organizations/search/name?name=<substring>`
pub async fn search_by_name<S>(
  _: ApiKey,
  State(state): State<AppState<S>>,
  Query(params): Query<NameSearchParams>,
) -> Result<Json<Vec<Organization>>, ApiError>
where
  S: DirectoryStore + Clone + Send + Sync + 'static,
{
  let orgs = state.directory.search_by_name(&params.name).await?;
  Ok(Json(orgs))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /organizations/` — body:
/// `{name, building_id, phones:[{number}], activity_ids:[int]}`
pub async fn create<S>(
  _: ApiKey,
  State(state): State<AppState<S>>,
  Json(body): Json<NewOrganization>,
) -> Result<impl IntoResponse, ApiError>
where
  S: DirectoryStore + Clone + Send + Sync + 'static,
{
  let org = state.directory.create(body).await?;
  Ok((StatusCode::CREATED, Json(org)))
}
