//! Building — a street address with coordinates that organizations occupy.

use serde::{Deserialize, Serialize};

pub type BuildingId = i64;

/// A building record. Organizations reference it by id; a building's
/// lifetime is independent of theirs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
  pub id:        BuildingId,
  pub address:   String,
  pub latitude:  f64,
  pub longitude: f64,
}

/// Input shape for creating a building (seed data and test fixtures).
#[derive(Debug, Clone)]
pub struct NewBuilding {
  pub address:   String,
  pub latitude:  f64,
  pub longitude: f64,
}
