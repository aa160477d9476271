//! Row structs and assembly of full organization views.
//!
//! Assembly happens inside the connection closure, in plain synchronous
//! rusqlite, so a list query costs one trip to the database thread.

use orgbook_core::{
  activity::ActivityRef,
  building::Building,
  organization::{Organization, Phone},
};
use rusqlite::{Connection, OptionalExtension as _};

/// Bare columns of an `organizations` row.
pub struct OrganizationRow {
  pub id:          i64,
  pub name:        String,
  pub building_id: i64,
}

impl OrganizationRow {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      name:        row.get(1)?,
      building_id: row.get(2)?,
    })
  }

  /// Assemble the full view: building (if the reference resolves), phones
  /// in insertion order, activity refs in id order.
  pub fn assemble(self, conn: &Connection) -> rusqlite::Result<Organization> {
    let building = conn
      .query_row(
        "SELECT id, address, latitude, longitude FROM buildings WHERE id = ?1",
        rusqlite::params![self.building_id],
        |row| {
          Ok(Building {
            id:        row.get(0)?,
            address:   row.get(1)?,
            latitude:  row.get(2)?,
            longitude: row.get(3)?,
          })
        },
      )
      .optional()?;

    let mut stmt = conn
      .prepare("SELECT number FROM phones WHERE organization_id = ?1 ORDER BY id")?;
    let phones = stmt
      .query_map(rusqlite::params![self.id], |row| {
        Ok(Phone { number: row.get(0)? })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut stmt = conn.prepare(
      "SELECT a.id, a.name
       FROM activities a
       JOIN organization_activities oa ON oa.activity_id = a.id
       WHERE oa.organization_id = ?1
       ORDER BY a.id",
    )?;
    let activities = stmt
      .query_map(rusqlite::params![self.id], |row| {
        Ok(ActivityRef { id: row.get(0)?, name: row.get(1)? })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(Organization {
      id: self.id,
      name: self.name,
      building_id: self.building_id,
      phones,
      activities,
      building,
    })
  }
}

/// Run `sql` — which must select `id, name, building_id` from
/// `organizations` — and assemble each hit.
pub fn assemble_query<P: rusqlite::Params>(
  conn: &Connection,
  sql: &str,
  params: P,
) -> rusqlite::Result<Vec<Organization>> {
  let mut stmt = conn.prepare(sql)?;
  let rows = stmt
    .query_map(params, |row| OrganizationRow::from_row(row))?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  rows.into_iter().map(|row| row.assemble(conn)).collect()
}
