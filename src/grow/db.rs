//! SQLite layer for the grow workspace and its archive.
//!
//! One database, six tables: three live (`plants`, `activity_logs`,
//! `environment_logs`) and three archive (`archived_grows`, `archived_logs`,
//! `archived_environment_logs`). WAL journal, foreign keys on. All
//! timestamps are TEXT (RFC 3339 or `YYYY-MM-DD`); SQL comparisons go
//! through `date(...)` so the two shapes interoperate.

use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

/// Stamped into `PRAGMA user_version` on first initialization.
pub const SCHEMA_VERSION: i32 = 1;

pub const SCHEMA_SQL: &str = r#"
PRAGMA user_version = 1;

CREATE TABLE IF NOT EXISTS plants (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    name             TEXT NOT NULL UNIQUE,
    strain           TEXT,
    stage            TEXT NOT NULL DEFAULT 'seedling',
    tent             TEXT,
    planted_date     TEXT,
    expected_harvest TEXT,
    notes            TEXT,
    archived         INTEGER NOT NULL DEFAULT 0,
    created_at       TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS activity_logs (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    plant_id      INTEGER NOT NULL REFERENCES plants(id) ON DELETE CASCADE,
    activity_type TEXT NOT NULL,
    description   TEXT,
    value         REAL,
    notes         TEXT,
    ph            REAL,
    ec            REAL,
    temperature   REAL,
    humidity      REAL,
    water_amount  REAL,
    height        REAL,
    nutrient_info TEXT,
    photo         TEXT,
    logged_at     TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_activity_logs_plant ON activity_logs(plant_id, logged_at);

CREATE TABLE IF NOT EXISTS environment_logs (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    tent        TEXT,
    temperature REAL,
    humidity    REAL,
    vpd         REAL,
    co2         REAL,
    notes       TEXT,
    logged_at   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_environment_logs_tent ON environment_logs(tent, logged_at);

-- Snapshot of a finished cultivation cycle. Denormalized on purpose: the
-- live plant row is deleted at archive time, so nothing here may depend on
-- joining back to `plants`.
CREATE TABLE IF NOT EXISTS archived_grows (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    original_plant_id INTEGER NOT NULL,
    name              TEXT NOT NULL,
    strain            TEXT,
    tent              TEXT,
    planted_date      TEXT,
    harvest_date      TEXT,
    final_yield       REAL,
    reason            TEXT NOT NULL,
    final_stage       TEXT,
    notes             TEXT,
    grow_cycle_key    TEXT,
    total_logs        INTEGER NOT NULL DEFAULT 0,
    archived_at       TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_archived_grows_tent ON archived_grows(tent, archived_at);
CREATE INDEX IF NOT EXISTS idx_archived_grows_cycle ON archived_grows(grow_cycle_key);

CREATE TABLE IF NOT EXISTS archived_logs (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    archived_grow_id  INTEGER NOT NULL REFERENCES archived_grows(id) ON DELETE CASCADE,
    original_log_id   INTEGER NOT NULL,
    original_plant_id INTEGER NOT NULL,
    activity_type     TEXT NOT NULL,
    description       TEXT,
    value             REAL,
    notes             TEXT,
    ph                REAL,
    ec                REAL,
    temperature       REAL,
    humidity          REAL,
    water_amount      REAL,
    height            REAL,
    nutrient_info     TEXT,
    photo             TEXT,
    logged_at         TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_archived_logs_grow ON archived_logs(archived_grow_id, logged_at);

CREATE TABLE IF NOT EXISTS archived_environment_logs (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    archived_grow_id INTEGER NOT NULL REFERENCES archived_grows(id) ON DELETE CASCADE,
    original_log_id  INTEGER NOT NULL,
    tent             TEXT,
    temperature      REAL,
    humidity         REAL,
    vpd              REAL,
    co2              REAL,
    notes            TEXT,
    logged_at        TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_archived_env_logs_grow ON archived_environment_logs(archived_grow_id, logged_at);
"#;

/// Per-connection pragmas. WAL for concurrent readers, foreign keys for the
/// archive cascade behavior.
fn configure_conn(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA foreign_keys = ON;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

/// Apply the schema. Safe to call on an existing database.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

pub fn schema_version(conn: &Connection) -> Result<i32> {
    let version = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(version)
}

/// Open (creating if needed) the grow database at `path`.
pub fn open(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        // rusqlite reports a missing parent directory as CannotOpen; create
        // it up front so first run works from a clean home.
        if fs::create_dir_all(parent).is_err() {
            tracing::warn!(dir = %parent.display(), "could not create database directory");
        }
    }
    let conn = Connection::open(path)?;
    configure_conn(&conn)?;
    initialize_schema(&conn)?;
    Ok(conn)
}

/// In-memory database with the full schema. Test scaffolding for the engine.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure_conn(&conn)?;
    initialize_schema(&conn)?;
    Ok(conn)
}
