use rusqlite::{Connection, params};

use crate::error::Result;
use crate::grow::model::EnvironmentLog;

/// Select the environment readings for `tent` whose timestamp falls inside
/// the inclusive `[start, end]` interval, newest first.
///
/// Pure read. The interval is compared at day granularity so date-only
/// bounds ("2024-04-20") still cover readings stamped later that day.
pub fn environment_window(
    conn: &Connection,
    tent: &str,
    start: &str,
    end: &str,
) -> Result<Vec<EnvironmentLog>> {
    let sql = format!(
        "SELECT {} FROM environment_logs
         WHERE tent = ?1
           AND date(logged_at) >= date(?2)
           AND date(logged_at) <= date(?3)
         ORDER BY logged_at DESC",
        EnvironmentLog::COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![tent, start, end], EnvironmentLog::from_row)?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}
