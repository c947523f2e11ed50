use anyhow::Result;

use crate::commands::{CommandReport, open_store};
use crate::grow::live::{NewPlant, insert_plant};
use crate::grow::model::STAGES;

#[derive(Debug, Clone)]
pub struct AddPlantOptions {
    pub name: String,
    pub strain: Option<String>,
    pub stage: Option<String>,
    pub tent: Option<String>,
    pub planted_date: Option<String>,
    pub expected_harvest: Option<String>,
    pub notes: Option<String>,
}

pub fn run(opts: &AddPlantOptions) -> Result<CommandReport> {
    let mut report = CommandReport::new("add-plant");

    if let Some(stage) = opts.stage.as_deref()
        && !STAGES.contains(&stage)
    {
        report.issue(format!(
            "unknown stage `{stage}`: use one of {}",
            STAGES.join(", ")
        ));
        return Ok(report);
    }

    let store = open_store()?;
    report.detail(format!("db_path={}", store.db_path.display()));

    let plant = insert_plant(
        &store.conn,
        &NewPlant {
            name: opts.name.clone(),
            strain: opts.strain.clone(),
            stage: opts.stage.clone(),
            tent: opts.tent.clone(),
            planted_date: opts.planted_date.clone(),
            expected_harvest: opts.expected_harvest.clone(),
            notes: opts.notes.clone(),
        },
    )?;

    report.detail(format!("plant_id={}", plant.id));
    report.detail(format!("name={}", plant.name));
    report.detail(format!("stage={}", plant.stage));
    Ok(report)
}
