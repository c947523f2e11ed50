use anyhow::Result;

use crate::commands::{CommandReport, open_store};
use crate::grow::restore::restore_grow;

#[derive(Debug, Clone)]
pub struct RestoreOptions {
    pub archived_grow_id: i64,
}

pub fn run(opts: &RestoreOptions) -> Result<CommandReport> {
    let mut store = open_store()?;
    let mut report = CommandReport::new("restore");
    report.detail(format!("db_path={}", store.db_path.display()));

    let default_stage = store.config.restore.default_stage.clone();
    let outcome = restore_grow(&mut store.conn, opts.archived_grow_id, &default_stage)?;

    report.detail(format!("new_plant_id={}", outcome.new_plant_id));
    report.detail(format!("plant_name={}", outcome.plant_name));
    Ok(report)
}
