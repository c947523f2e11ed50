//! Flat-text export of one tent's full archive, one block per grow cycle.

use std::collections::BTreeMap;

use chrono::Utc;
use rusqlite::Connection;

use crate::error::{GrowError, Result};
use crate::grow::aggregate::{GrowCycle, cycles_for_tent};

/// Render the archive of `tent` as a flat text document.
///
/// Fails NotFound when the tent has no archived grows; an individual cycle
/// with no rows in a subsection omits that subsection instead.
pub fn export_tent_archive(conn: &Connection, tent: &str) -> Result<String> {
    let cycles = cycles_for_tent(conn, tent)?;
    if cycles.is_empty() {
        return Err(GrowError::TentHasNoArchives(tent.to_string()));
    }

    tracing::info!(tent, cycles = cycles.len(), "exporting tent archive");
    Ok(render(tent, &cycles, &Utc::now().to_rfc3339()))
}

fn render(tent: &str, cycles: &BTreeMap<String, GrowCycle>, exported_at: &str) -> String {
    let mut out = String::new();
    out.push_str("Grow Cycle Archive Export\n");
    out.push_str(&format!("Tent: {tent}\n"));
    out.push_str(&format!("Exported At: {exported_at}\n"));
    out.push_str(&format!("Total Cycles: {}\n", cycles.len()));

    for (key, cycle) in cycles {
        out.push_str(&format!("\n=== Grow Cycle: {key} ===\n"));

        // Grow id -> plant name, for labeling log rows in multi-plant cycles.
        let names: BTreeMap<i64, &str> = cycle
            .plants
            .iter()
            .map(|p| (p.id, p.name.as_str()))
            .collect();

        if !cycle.plants.is_empty() {
            out.push_str("\nPlants in this Cycle:\n");
            out.push_str(
                "Name,Strain,Planted Date,Harvest Date,Final Yield,Final Stage,Reason,Total Logs\n",
            );
            for plant in &cycle.plants {
                out.push_str(&format!(
                    "{},{},{},{},{},{},{},{}\n",
                    plant.name,
                    opt_str(plant.strain.as_deref()),
                    opt_str(plant.planted_date.as_deref()),
                    opt_str(plant.harvest_date.as_deref()),
                    opt_f64(plant.final_yield),
                    opt_str(plant.final_stage.as_deref()),
                    plant.reason,
                    plant.total_logs,
                ));
            }
        }

        if !cycle.environment.is_empty() {
            out.push_str("\nEnvironment Data for this Cycle:\n");
            out.push_str("Logged At,Temperature,Humidity,VPD,CO2,Notes\n");
            for reading in &cycle.environment {
                out.push_str(&format!(
                    "{},{},{},{},{},{}\n",
                    reading.logged_at,
                    opt_f64(reading.temperature),
                    opt_f64(reading.humidity),
                    opt_f64(reading.vpd),
                    opt_f64(reading.co2),
                    opt_str(reading.notes.as_deref()),
                ));
            }
        }

        if !cycle.logs.is_empty() {
            out.push_str("\nPlant Activity Logs for this Cycle:\n");
            out.push_str("Logged At,Plant,Activity,Description,Value,pH,EC,Temperature,Humidity,Notes\n");
            for log in &cycle.logs {
                out.push_str(&format!(
                    "{},{},{},{},{},{},{},{},{},{}\n",
                    log.logged_at,
                    names.get(&log.archived_grow_id).copied().unwrap_or(""),
                    log.activity_type,
                    opt_str(log.description.as_deref()),
                    opt_f64(log.value),
                    opt_f64(log.ph),
                    opt_f64(log.ec),
                    opt_f64(log.temperature),
                    opt_f64(log.humidity),
                    opt_str(log.notes.as_deref()),
                ));
            }
        }
    }

    out
}

fn opt_str(value: Option<&str>) -> &str {
    value.unwrap_or("")
}

fn opt_f64(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => String::new(),
    }
}
