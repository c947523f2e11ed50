//! Archive write path: snapshot a live plant, copy its environment window,
//! move its logs, delete the plant. One transaction; either every step
//! persists or none do.

use chrono::Utc;
use rusqlite::{Connection, params};

use crate::error::{GrowError, Result};
use crate::grow::cycle_key::grow_cycle_key;
use crate::grow::live::fetch_plant;
use crate::grow::model::ActivityLog;
use crate::grow::window::environment_window;

#[derive(Debug, Clone)]
pub struct ArchiveRequest {
    pub plant_id: i64,
    pub reason: String,
    pub final_yield: Option<f64>,
    pub harvest_date: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ArchiveOutcome {
    pub archived_grow_id: i64,
    pub environment_logs_archived: bool,
    pub total_logs: i64,
}

/// Archive one live plant.
///
/// The plant row is fetched and validated inside the mutating transaction,
/// and the final delete is conditional on `archived = 0`, so two concurrent
/// requests for the same plant cannot both succeed.
pub fn archive_plant(conn: &mut Connection, req: &ArchiveRequest) -> Result<ArchiveOutcome> {
    let tx = conn.transaction()?;

    let plant = fetch_plant(&tx, req.plant_id)?;
    if plant.archived {
        return Err(GrowError::PlantAlreadyArchived(plant.id));
    }

    let total_logs: i64 = tx.query_row(
        "SELECT COUNT(*) FROM activity_logs WHERE plant_id = ?1",
        [plant.id],
        |row| row.get(0),
    )?;

    let cycle_key = grow_cycle_key(plant.tent.as_deref(), plant.planted_date.as_deref(), &plant.name);
    let archived_at = Utc::now().to_rfc3339();

    tx.execute(
        "INSERT INTO archived_grows (original_plant_id, name, strain, tent, planted_date,
             harvest_date, final_yield, reason, final_stage, notes, grow_cycle_key, total_logs, archived_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            plant.id,
            plant.name,
            plant.strain,
            plant.tent,
            plant.planted_date,
            req.harvest_date,
            req.final_yield,
            req.reason,
            plant.stage,
            plant.notes,
            cycle_key,
            total_logs,
            archived_at,
        ],
    )?;
    let grow_id = tx.last_insert_rowid();

    // Environment readings are copied, never moved: the source rows belong
    // to the tent, not to this plant, and may be copied again by a later
    // archive from the same tent and period.
    let mut environment_logs_archived = false;
    if let (Some(tent), Some(planted)) = (plant.tent.as_deref(), plant.planted_date.as_deref()) {
        let window_end = req
            .harvest_date
            .clone()
            .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());
        let window = environment_window(&tx, tent, planted, &window_end)?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO archived_environment_logs
                     (archived_grow_id, original_log_id, tent, temperature, humidity, vpd, co2, notes, logged_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for reading in &window {
                stmt.execute(params![
                    grow_id,
                    reading.id,
                    reading.tent,
                    reading.temperature,
                    reading.humidity,
                    reading.vpd,
                    reading.co2,
                    reading.notes,
                    reading.logged_at,
                ])?;
            }
        }
        environment_logs_archived = true;
    }

    // Copy the plant's logs oldest-first before the plant row (and, via
    // cascade, the live logs) is deleted.
    {
        let sql = format!(
            "SELECT {} FROM activity_logs WHERE plant_id = ?1 ORDER BY logged_at ASC, id ASC",
            ActivityLog::COLUMNS
        );
        let mut select = tx.prepare(&sql)?;
        let logs = select.query_map([plant.id], ActivityLog::from_row)?;

        let mut insert = tx.prepare_cached(
            "INSERT INTO archived_logs
                 (archived_grow_id, original_log_id, original_plant_id, activity_type, description,
                  value, notes, ph, ec, temperature, humidity, water_amount, height,
                  nutrient_info, photo, logged_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
        )?;
        for log in logs {
            let log = log?;
            insert.execute(params![
                grow_id,
                log.id,
                log.plant_id,
                log.activity_type,
                log.description,
                log.value,
                log.notes,
                log.ph,
                log.ec,
                log.temperature,
                log.humidity,
                log.water_amount,
                log.height,
                log.nutrient_info,
                log.photo,
                log.logged_at,
            ])?;
        }
    }

    // Conditional delete is the last guard against a racing archive that
    // slipped past the fetch above.
    let deleted = tx.execute(
        "DELETE FROM plants WHERE id = ?1 AND archived = 0",
        [plant.id],
    )?;
    if deleted != 1 {
        return Err(GrowError::PlantNotFound(plant.id));
    }

    tx.commit()?;
    tracing::info!(
        plant_id = plant.id,
        archived_grow_id = grow_id,
        total_logs,
        environment_logs_archived,
        "plant archived"
    );

    Ok(ArchiveOutcome {
        archived_grow_id: grow_id,
        environment_logs_archived,
        total_logs,
    })
}
