use anyhow::Result;

use crate::commands::{CommandReport, open_store, resolve_db_path};
use crate::grow::config::load_config;

const TABLES: &[&str] = &[
    "plants",
    "activity_logs",
    "environment_logs",
    "archived_grows",
    "archived_logs",
    "archived_environment_logs",
];

pub fn run() -> Result<CommandReport> {
    let mut report = CommandReport::new("status");

    let config = load_config()?;
    let db_path = resolve_db_path(&config)?;
    report.detail(format!("db_path={}", db_path.display()));
    report.detail(format!(
        "restore_default_stage={}",
        config.restore.default_stage
    ));

    if !db_path.exists() {
        report.issue("grow database does not exist yet; add a plant to create it");
        return Ok(report);
    }

    let store = open_store()?;
    for table in TABLES {
        let count: i64 =
            store
                .conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })?;
        report.detail(format!("{table}={count}"));
    }

    Ok(report)
}
