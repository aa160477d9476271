//! [`SqliteStore`] — the SQLite implementation of [`DirectoryStore`].

use std::path::Path;

use orgbook_core::{
  activity::{Activity, ActivityId, NewActivity},
  building::{Building, BuildingId, NewBuilding},
  organization::{NewOrganization, Organization, OrganizationId},
  store::DirectoryStore,
};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  rows::{OrganizationRow, assemble_query},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A directory store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── DirectoryStore impl ─────────────────────────────────────────────────────

impl DirectoryStore for SqliteStore {
  type Error = Error;

  // ── Buildings & activities ──────────────────────────────────────────────

  async fn add_building(&self, new: NewBuilding) -> Result<Building> {
    let building = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO buildings (address, latitude, longitude)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![new.address, new.latitude, new.longitude],
        )?;
        Ok(Building {
          id:        conn.last_insert_rowid(),
          address:   new.address,
          latitude:  new.latitude,
          longitude: new.longitude,
        })
      })
      .await?;
    Ok(building)
  }

  async fn count_buildings(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM buildings", [], |row| {
          row.get(0)
        })?)
      })
      .await?;
    Ok(count as u64)
  }

  async fn add_activity(&self, new: NewActivity) -> Result<Activity> {
    let activity = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO activities (name, parent_id) VALUES (?1, ?2)",
          rusqlite::params![new.name, new.parent_id],
        )?;
        Ok(Activity {
          id:        conn.last_insert_rowid(),
          name:      new.name,
          parent_id: new.parent_id,
        })
      })
      .await?;
    Ok(activity)
  }

  async fn list_activities(&self) -> Result<Vec<Activity>> {
    let activities = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare("SELECT id, name, parent_id FROM activities ORDER BY id")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Activity {
              id:        row.get(0)?,
              name:      row.get(1)?,
              parent_id: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(activities)
  }

  // ── Organizations ───────────────────────────────────────────────────────

  async fn create_organization(
    &self,
    new: NewOrganization,
  ) -> Result<Organization> {
    let org = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        tx.execute(
          "INSERT INTO organizations (name, building_id) VALUES (?1, ?2)",
          rusqlite::params![new.name, new.building_id],
        )?;
        let org_id = tx.last_insert_rowid();

        for phone in &new.phones {
          tx.execute(
            "INSERT INTO phones (number, organization_id) VALUES (?1, ?2)",
            rusqlite::params![phone.number, org_id],
          )?;
        }

        // Link only the ids that resolve; the rest are skipped without
        // note.
        for activity_id in &new.activity_ids {
          tx.execute(
            "INSERT OR IGNORE INTO organization_activities
               (organization_id, activity_id)
             SELECT ?1, id FROM activities WHERE id = ?2",
            rusqlite::params![org_id, activity_id],
          )?;
        }

        let row = OrganizationRow {
          id:          org_id,
          name:        new.name,
          building_id: new.building_id,
        };
        let org = row.assemble(&tx)?;
        tx.commit()?;
        Ok(org)
      })
      .await?;
    Ok(org)
  }

  async fn get_organization(
    &self,
    id: OrganizationId,
  ) -> Result<Option<Organization>> {
    let org = self
      .conn
      .call(move |conn| {
        let row = conn
          .query_row(
            "SELECT id, name, building_id FROM organizations WHERE id = ?1",
            rusqlite::params![id],
            |row| OrganizationRow::from_row(row),
          )
          .optional()?;
        match row {
          Some(row) => Ok(Some(row.assemble(conn)?)),
          None => Ok(None),
        }
      })
      .await?;
    Ok(org)
  }

  async fn organizations_in_building(
    &self,
    building_id: BuildingId,
  ) -> Result<Vec<Organization>> {
    let orgs = self
      .conn
      .call(move |conn| {
        Ok(assemble_query(
          conn,
          "SELECT id, name, building_id FROM organizations
           WHERE building_id = ?1
           ORDER BY id",
          rusqlite::params![building_id],
        )?)
      })
      .await?;
    Ok(orgs)
  }

  async fn organizations_with_activity(
    &self,
    activity_id: ActivityId,
  ) -> Result<Vec<Organization>> {
    let orgs = self
      .conn
      .call(move |conn| {
        Ok(assemble_query(
          conn,
          "SELECT o.id, o.name, o.building_id
           FROM organizations o
           JOIN organization_activities oa ON oa.organization_id = o.id
           WHERE oa.activity_id = ?1
           ORDER BY o.id",
          rusqlite::params![activity_id],
        )?)
      })
      .await?;
    Ok(orgs)
  }

  async fn organizations_with_any_activity(
    &self,
    ids: &[ActivityId],
  ) -> Result<Vec<Organization>> {
    if ids.is_empty() {
      return Ok(Vec::new());
    }
    let ids = ids.to_vec();

    let orgs = self
      .conn
      .call(move |conn| {
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
          "SELECT DISTINCT o.id, o.name, o.building_id
           FROM organizations o
           JOIN organization_activities oa ON oa.organization_id = o.id
           WHERE oa.activity_id IN ({placeholders})
           ORDER BY o.id"
        );
        Ok(assemble_query(conn, &sql, rusqlite::params_from_iter(ids))?)
      })
      .await?;
    Ok(orgs)
  }

  async fn list_organizations(&self) -> Result<Vec<Organization>> {
    let orgs = self
      .conn
      .call(|conn| {
        Ok(assemble_query(
          conn,
          "SELECT id, name, building_id FROM organizations ORDER BY id",
          [],
        )?)
      })
      .await?;
    Ok(orgs)
  }
}
