//! The activity forest and its depth-bounded descendant closure.
//!
//! Rebuilt on demand from the store's full activity enumeration; nothing is
//! cached between queries.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::activity::{Activity, ActivityId};

/// Closure depth bound. The starting node counts as level 1, so the
/// closure reaches children (level 2) and grandchildren (level 3) and no
/// further.
pub const MAX_DEPTH: usize = 3;

/// An arena view of the activity forest: nodes keyed by id, a children
/// adjacency map, and roots in the store's natural (id) order.
#[derive(Debug, Default)]
pub struct ActivityForest {
  nodes:    HashMap<ActivityId, Activity>,
  children: HashMap<ActivityId, Vec<ActivityId>>,
  roots:    Vec<ActivityId>,
}

impl ActivityForest {
  /// Build the forest from activities in store enumeration order.
  pub fn from_activities(activities: Vec<Activity>) -> Self {
    let mut forest = Self::default();
    for activity in activities {
      match activity.parent_id {
        Some(parent) => {
          forest.children.entry(parent).or_default().push(activity.id)
        }
        None => forest.roots.push(activity.id),
      }
      forest.nodes.insert(activity.id, activity);
    }
    forest
  }

  pub fn get(&self, id: ActivityId) -> Option<&Activity> {
    self.nodes.get(&id)
  }

  /// Root activities in enumeration order.
  pub fn roots(&self) -> impl Iterator<Item = &Activity> {
    self.roots.iter().filter_map(|id| self.nodes.get(id))
  }

  /// First root activity whose name contains `needle` case-insensitively.
  ///
  /// Matching uses a Unicode lowercase fold, not an ASCII one, so Cyrillic
  /// names compare correctly. Only roots are considered.
  pub fn resolve_root_by_name(&self, needle: &str) -> Option<ActivityId> {
    let needle = needle.to_lowercase();
    self
      .roots()
      .find(|root| root.name.to_lowercase().contains(&needle))
      .map(|root| root.id)
  }

  /// The id of `start` plus all descendant ids down to [`MAX_DEPTH`]
  /// levels.
  ///
  /// Unknown ids yield an empty set. Nodes beyond the depth bound are
  /// silently excluded. A branch that revisits a node is abandoned; the
  /// forest invariant forbids cycles, but a malformed parent link must not
  /// send the traversal into unbounded recursion.
  pub fn descendant_closure(&self, start: ActivityId) -> BTreeSet<ActivityId> {
    let mut closure = BTreeSet::new();
    if !self.nodes.contains_key(&start) {
      return closure;
    }
    let mut visited = HashSet::new();
    self.collect(start, 1, &mut visited, &mut closure);
    closure
  }

  fn collect(
    &self,
    id:      ActivityId,
    level:   usize,
    visited: &mut HashSet<ActivityId>,
    out:     &mut BTreeSet<ActivityId>,
  ) {
    if level > MAX_DEPTH || !visited.insert(id) {
      return;
    }
    out.insert(id);
    if let Some(children) = self.children.get(&id) {
      for &child in children {
        self.collect(child, level + 1, visited, out);
      }
    }
  }
}
