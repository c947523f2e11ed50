//! Read-side grouping of archived grows into derived grow cycles.

use std::collections::BTreeMap;

use rusqlite::Connection;
use serde::Serialize;

use crate::error::Result;
use crate::grow::model::{ArchivedActivityLog, ArchivedEnvironmentLog, ArchivedGrow};

/// One derived cycle: every archived grow sharing a cycle key, plus the
/// environment and activity rows archived with those grows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GrowCycle {
    pub plants: Vec<ArchivedGrow>,
    pub environment: Vec<ArchivedEnvironmentLog>,
    pub logs: Vec<ArchivedActivityLog>,
}

/// Group a tent's archive by cycle key.
///
/// Plants keep archive order (most recently archived first); environment
/// and log rows are chronological ascending. A grow whose stored key is
/// NULL gets a synthetic `cycle_<id>` key so every grow belongs to exactly
/// one group. Returns an empty map for a tent with no archive.
pub fn cycles_for_tent(conn: &Connection, tent: &str) -> Result<BTreeMap<String, GrowCycle>> {
    let sql = format!(
        "SELECT {} FROM archived_grows WHERE tent = ?1 ORDER BY archived_at DESC, id DESC",
        ArchivedGrow::COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let grows = stmt
        .query_map([tent], ArchivedGrow::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut cycles: BTreeMap<String, GrowCycle> = BTreeMap::new();
    let mut key_by_grow: BTreeMap<i64, String> = BTreeMap::new();
    for grow in grows {
        let key = match grow.grow_cycle_key.as_deref() {
            Some(k) if !k.is_empty() => k.to_string(),
            _ => format!("cycle_{}", grow.id),
        };
        key_by_grow.insert(grow.id, key.clone());
        cycles.entry(key).or_default().plants.push(grow);
    }
    if cycles.is_empty() {
        return Ok(cycles);
    }

    let env_sql = format!(
        "SELECT {} FROM archived_environment_logs
         WHERE archived_grow_id IN (SELECT id FROM archived_grows WHERE tent = ?1)
         ORDER BY logged_at ASC, id ASC",
        ArchivedEnvironmentLog::COLUMNS
    );
    let mut stmt = conn.prepare(&env_sql)?;
    let env_rows = stmt.query_map([tent], ArchivedEnvironmentLog::from_row)?;
    for row in env_rows {
        let row = row?;
        if let Some(key) = key_by_grow.get(&row.archived_grow_id)
            && let Some(cycle) = cycles.get_mut(key)
        {
            cycle.environment.push(row);
        }
    }

    let log_sql = format!(
        "SELECT {} FROM archived_logs
         WHERE archived_grow_id IN (SELECT id FROM archived_grows WHERE tent = ?1)
         ORDER BY logged_at ASC, id ASC",
        ArchivedActivityLog::COLUMNS
    );
    let mut stmt = conn.prepare(&log_sql)?;
    let log_rows = stmt.query_map([tent], ArchivedActivityLog::from_row)?;
    for row in log_rows {
        let row = row?;
        if let Some(key) = key_by_grow.get(&row.archived_grow_id)
            && let Some(cycle) = cycles.get_mut(key)
        {
            cycle.logs.push(row);
        }
    }

    Ok(cycles)
}
