//! Handlers for `/activities` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/activities/:id/organizations` | Direct tags only, no closure |

use axum::{
  Json,
  extract::{Path, State},
};
use orgbook_core::{
  activity::ActivityId, organization::Organization, store::DirectoryStore,
};

use crate::{AppState, auth::ApiKey, error::ApiError};

/// `GET /activities/:activity_id/organizations`
pub async fn organizations<S>(
  _: ApiKey,
  State(state): State<AppState<S>>,
  Path(activity_id): Path<ActivityId>,
) -> Result<Json<Vec<Organization>>, ApiError>
where
  S: DirectoryStore + Clone + Send + Sync + 'static,
{
  let orgs =
    state.directory.organizations_with_activity(activity_id).await?;
  Ok(Json(orgs))
}
