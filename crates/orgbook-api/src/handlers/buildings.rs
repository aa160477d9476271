//! Handlers for `/buildings` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/buildings/:id/organizations` | Empty list for unknown ids |

use axum::{
  Json,
  extract::{Path, State},
};
use orgbook_core::{
  building::BuildingId, organization::Organization, store::DirectoryStore,
};

use crate::{AppState, auth::ApiKey, error::ApiError};

/// `GET /buildings/:building_id/organizations`
pub async fn organizations<S>(
  _: ApiKey,
  State(state): State<AppState<S>>,
  Path(building_id): Path<BuildingId>,
) -> Result<Json<Vec<Organization>>, ApiError>
where
  S: DirectoryStore + Clone + Send + Sync + 'static,
{
  let orgs = state.directory.organizations_in_building(building_id).await?;
  Ok(Json(orgs))
}
