use anyhow::Result;

use crate::commands::{CommandReport, open_store};
use crate::grow::live::{NewEnvironmentLog, insert_environment_log};

#[derive(Debug, Clone, Default)]
pub struct LogEnvironmentOptions {
    pub tent: Option<String>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub vpd: Option<f64>,
    pub co2: Option<f64>,
    pub notes: Option<String>,
    pub logged_at: Option<String>,
}

pub fn run(opts: &LogEnvironmentOptions) -> Result<CommandReport> {
    let store = open_store()?;
    let mut report = CommandReport::new("env-log");

    let log = insert_environment_log(
        &store.conn,
        &NewEnvironmentLog {
            tent: opts.tent.clone(),
            temperature: opts.temperature,
            humidity: opts.humidity,
            vpd: opts.vpd,
            co2: opts.co2,
            notes: opts.notes.clone(),
            logged_at: opts.logged_at.clone(),
        },
    )?;

    report.detail(format!("environment_log_id={}", log.id));
    if let Some(tent) = &log.tent {
        report.detail(format!("tent={tent}"));
    }
    report.detail(format!("logged_at={}", log.logged_at));
    Ok(report)
}
