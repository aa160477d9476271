//! Activity — a hierarchical category. Parent links form a forest; an
//! activity without a parent is a root.

use serde::{Deserialize, Serialize};

pub type ActivityId = i64;

/// A full activity node, including its position in the forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
  pub id:        ActivityId,
  pub name:      String,
  /// `None` marks a root activity.
  pub parent_id: Option<ActivityId>,
}

/// The `{id, name}` view embedded in organization responses. The parent
/// link is not part of the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRef {
  pub id:   ActivityId,
  pub name: String,
}

/// Input shape for creating an activity (seed data and test fixtures).
#[derive(Debug, Clone)]
pub struct NewActivity {
  pub name:      String,
  pub parent_id: Option<ActivityId>,
}
