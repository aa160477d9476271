//! Organization — the central directory entity, assembled with its
//! building, phones, and activity tags on every read.

use serde::{Deserialize, Serialize};

use crate::{
  activity::{ActivityId, ActivityRef},
  building::{Building, BuildingId},
};

pub type OrganizationId = i64;

/// A phone number owned by an organization. The storage row carries its own
/// id; the public view is the number alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phone {
  pub number: String,
}

/// The fully assembled organization view returned by every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
  pub id:          OrganizationId,
  pub name:        String,
  pub building_id: BuildingId,
  pub phones:      Vec<Phone>,
  pub activities:  Vec<ActivityRef>,
  /// `None` only when `building_id` dangles; creates accept a dangling
  /// reference without checking it.
  pub building:    Option<Building>,
}

/// Input shape for creating an organization.
///
/// `building_id` is taken as-is, without an existence check. Activity ids
/// that do not resolve are skipped silently.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrganization {
  pub name:         String,
  pub building_id:  BuildingId,
  #[serde(default)]
  pub phones:       Vec<Phone>,
  #[serde(default)]
  pub activity_ids: Vec<ActivityId>,
}
