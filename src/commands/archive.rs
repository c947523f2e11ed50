use anyhow::Result;

use crate::commands::{CommandReport, open_store};
use crate::grow::archive::{ArchiveRequest, archive_plant};

#[derive(Debug, Clone)]
pub struct ArchiveOptions {
    pub plant_id: i64,
    pub reason: String,
    pub final_yield: Option<f64>,
    pub harvest_date: Option<String>,
}

pub fn run(opts: &ArchiveOptions) -> Result<CommandReport> {
    let mut store = open_store()?;
    let mut report = CommandReport::new("archive");
    report.detail(format!("db_path={}", store.db_path.display()));

    let outcome = archive_plant(
        &mut store.conn,
        &ArchiveRequest {
            plant_id: opts.plant_id,
            reason: opts.reason.clone(),
            final_yield: opts.final_yield,
            harvest_date: opts.harvest_date.clone(),
        },
    )?;

    report.detail(format!("archived_grow_id={}", outcome.archived_grow_id));
    report.detail(format!(
        "environment_logs_archived={}",
        outcome.environment_logs_archived
    ));
    report.detail(format!("total_logs={}", outcome.total_logs));
    Ok(report)
}
