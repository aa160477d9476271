//! SQL schema for the orgbook SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS buildings (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    address   TEXT NOT NULL,
    latitude  REAL NOT NULL,
    longitude REAL NOT NULL
);

-- Self-referential parent link; NULL marks a root.
CREATE TABLE IF NOT EXISTS activities (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT NOT NULL,
    parent_id INTEGER REFERENCES activities(id)
);

-- building_id is a weak reference: deliberately no foreign key, so an
-- organization may point at a building that does not exist.
CREATE TABLE IF NOT EXISTS organizations (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    building_id INTEGER NOT NULL
);

-- Phones are owned: they go with their organization.
CREATE TABLE IF NOT EXISTS phones (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    number          TEXT NOT NULL,
    organization_id INTEGER NOT NULL
                    REFERENCES organizations(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS organization_activities (
    organization_id INTEGER NOT NULL
                    REFERENCES organizations(id) ON DELETE CASCADE,
    activity_id     INTEGER NOT NULL REFERENCES activities(id),
    PRIMARY KEY (organization_id, activity_id)
);

CREATE INDEX IF NOT EXISTS organizations_building_idx ON organizations(building_id);
CREATE INDEX IF NOT EXISTS activities_parent_idx      ON activities(parent_id);
CREATE INDEX IF NOT EXISTS phones_organization_idx    ON phones(organization_id);

PRAGMA user_version = 1;
";
