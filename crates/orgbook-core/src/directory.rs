//! `Directory` — the query engine composing the store, the activity
//! forest, and the geo distance function.

use std::collections::HashSet;

use crate::{
  activity::ActivityId,
  building::BuildingId,
  error::{Error, Result},
  geo::{self, GeoPoint},
  hierarchy::ActivityForest,
  organization::{NewOrganization, Organization, OrganizationId},
  store::DirectoryStore,
};

/// The query engine. Holds the storage handle explicitly — construct one
/// at process start and share it behind an `Arc`; there is no ambient
/// global.
pub struct Directory<S> {
  store: S,
}

impl<S: DirectoryStore> Directory<S> {
  pub fn new(store: S) -> Self {
    Self { store }
  }

  /// Organizations located in `building_id`. An unknown building yields an
  /// empty list, indistinguishable from an empty building.
  pub async fn organizations_in_building(
    &self,
    building_id: BuildingId,
  ) -> Result<Vec<Organization>> {
    self
      .store
      .organizations_in_building(building_id)
      .await
      .map_err(Error::store)
  }

  /// Organizations directly tagged with `activity_id` — no closure. An
  /// unknown activity yields an empty list.
  pub async fn organizations_with_activity(
    &self,
    activity_id: ActivityId,
  ) -> Result<Vec<Organization>> {
    self
      .store
      .organizations_with_activity(activity_id)
      .await
      .map_err(Error::store)
  }

  /// Organizations whose building lies within `radius_meters` of `center`.
  ///
  /// Full scan: every organization's building coordinates are compared
  /// against `center`. The directory's scale does not warrant a spatial
  /// index.
  pub async fn organizations_within_radius(
    &self,
    center: GeoPoint,
    radius_meters: f64,
  ) -> Result<Vec<Organization>> {
    let all = self.store.list_organizations().await.map_err(Error::store)?;
    Ok(
      all
        .into_iter()
        .filter(|org| {
          org.building.as_ref().is_some_and(|b| {
            let at = GeoPoint { latitude: b.latitude, longitude: b.longitude };
            geo::distance_meters(center, at) <= radius_meters
          })
        })
        .collect(),
    )
  }

  /// Fails with [`Error::OrganizationNotFound`] if the id is absent.
  pub async fn organization_by_id(
    &self,
    id: OrganizationId,
  ) -> Result<Organization> {
    self
      .store
      .get_organization(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::OrganizationNotFound(id))
  }

  /// Resolve `name` to a root activity, take its depth-bounded descendant
  /// closure, and return every organization tagged with any id in it.
  ///
  /// No matching root yields an empty list, not an error. An organization
  /// tagged with several qualifying activities appears once.
  pub async fn search_by_activity_tree(
    &self,
    name: &str,
  ) -> Result<Vec<Organization>> {
    let activities = self.store.list_activities().await.map_err(Error::store)?;
    let forest = ActivityForest::from_activities(activities);

    let Some(root) = forest.resolve_root_by_name(name) else {
      return Ok(Vec::new());
    };

    let closure: Vec<ActivityId> =
      forest.descendant_closure(root).into_iter().collect();
    let matches = self
      .store
      .organizations_with_any_activity(&closure)
      .await
      .map_err(Error::store)?;

    // One entry per organization id, whatever the store returned.
    let mut seen = HashSet::new();
    Ok(matches.into_iter().filter(|org| seen.insert(org.id)).collect())
  }

  /// Case-insensitive substring match on organization names.
  pub async fn search_by_name(&self, name: &str) -> Result<Vec<Organization>> {
    let needle = name.to_lowercase();
    let all = self.store.list_organizations().await.map_err(Error::store)?;
    Ok(
      all
        .into_iter()
        .filter(|org| org.name.to_lowercase().contains(&needle))
        .collect(),
    )
  }

  /// Create an organization. See
  /// [`DirectoryStore::create_organization`] for the silent-skip semantics
  /// of unknown activity ids.
  pub async fn create(&self, new: NewOrganization) -> Result<Organization> {
    self.store.create_organization(new).await.map_err(Error::store)
  }
}
