//! The `DirectoryStore` trait — the persistence contract for the directory.
//!
//! The trait is implemented by storage backends (e.g.
//! `orgbook-store-sqlite`). Higher layers depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  activity::{Activity, ActivityId, NewActivity},
  building::{Building, BuildingId, NewBuilding},
  organization::{NewOrganization, Organization, OrganizationId},
};

/// Abstraction over a directory storage backend.
///
/// Every method is one unit of work against the backing store; isolation
/// between concurrent requests is the backend's concern. List results come
/// back in organization-id order, fully assembled (building, phones,
/// activity refs).
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait DirectoryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Buildings & activities ────────────────────────────────────────────

  /// Create and persist a building.
  fn add_building(
    &self,
    new: NewBuilding,
  ) -> impl Future<Output = Result<Building, Self::Error>> + Send + '_;

  /// Number of building records. Used by the bootstrap seeding to probe
  /// for an empty store.
  fn count_buildings(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Create and persist an activity. The parent link is taken as given;
  /// the forest invariant is enforced at query time, not here.
  fn add_activity(
    &self,
    new: NewActivity,
  ) -> impl Future<Output = Result<Activity, Self::Error>> + Send + '_;

  /// All activities in id order. Feeds
  /// [`ActivityForest`](crate::hierarchy::ActivityForest).
  fn list_activities(
    &self,
  ) -> impl Future<Output = Result<Vec<Activity>, Self::Error>> + Send + '_;

  // ── Organizations ─────────────────────────────────────────────────────

  /// Create an organization atomically: the record, one phone row per
  /// number, and a link for each activity id that resolves, visible
  /// together or not at all. An unknown `building_id` is accepted as-is;
  /// unknown activity ids are skipped without note.
  fn create_organization(
    &self,
    new: NewOrganization,
  ) -> impl Future<Output = Result<Organization, Self::Error>> + Send + '_;

  /// Retrieve an organization by id. Returns `None` if not found.
  fn get_organization(
    &self,
    id: OrganizationId,
  ) -> impl Future<Output = Result<Option<Organization>, Self::Error>> + Send + '_;

  /// Organizations located in `building_id`. An unknown building yields an
  /// empty list.
  fn organizations_in_building(
    &self,
    building_id: BuildingId,
  ) -> impl Future<Output = Result<Vec<Organization>, Self::Error>> + Send + '_;

  /// Organizations directly tagged with exactly `activity_id`.
  fn organizations_with_activity(
    &self,
    activity_id: ActivityId,
  ) -> impl Future<Output = Result<Vec<Organization>, Self::Error>> + Send + '_;

  /// Distinct organizations tagged with any id in `ids`.
  fn organizations_with_any_activity<'a>(
    &'a self,
    ids: &'a [ActivityId],
  ) -> impl Future<Output = Result<Vec<Organization>, Self::Error>> + Send + 'a;

  /// Every organization. The radius and name searches scan this.
  fn list_organizations(
    &self,
  ) -> impl Future<Output = Result<Vec<Organization>, Self::Error>> + Send + '_;
}
