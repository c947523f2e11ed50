use anyhow::Result;

use crate::commands::{CommandReport, open_store};
use crate::grow::live::{NewActivityLog, insert_activity_log};

#[derive(Debug, Clone, Default)]
pub struct LogActivityOptions {
    pub plant_id: i64,
    pub activity_type: String,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub notes: Option<String>,
    pub ph: Option<f64>,
    pub ec: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub water_amount: Option<f64>,
    pub height: Option<f64>,
    pub nutrient_info: Option<String>,
    pub photo: Option<String>,
    pub logged_at: Option<String>,
}

pub fn run(opts: &LogActivityOptions) -> Result<CommandReport> {
    let store = open_store()?;
    let mut report = CommandReport::new("log");

    let log = insert_activity_log(
        &store.conn,
        &NewActivityLog {
            plant_id: opts.plant_id,
            activity_type: opts.activity_type.clone(),
            description: opts.description.clone(),
            value: opts.value,
            notes: opts.notes.clone(),
            ph: opts.ph,
            ec: opts.ec,
            temperature: opts.temperature,
            humidity: opts.humidity,
            water_amount: opts.water_amount,
            height: opts.height,
            nutrient_info: opts.nutrient_info.clone(),
            photo: opts.photo.clone(),
            logged_at: opts.logged_at.clone(),
        },
    )?;

    report.detail(format!("log_id={}", log.id));
    report.detail(format!("plant_id={}", log.plant_id));
    report.detail(format!("activity_type={}", log.activity_type));
    report.detail(format!("logged_at={}", log.logged_at));
    Ok(report)
}
