//! Minimal write path for the live workspace: create plants and record
//! activity/environment logs. The full CRUD surface of the tracker lives in
//! the web app; these inserts are what the archival engine needs in front
//! of it.

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

use crate::error::{GrowError, Result};
use crate::grow::model::{ActivityLog, EnvironmentLog, Plant};

#[derive(Debug, Clone, Default)]
pub struct NewPlant {
    pub name: String,
    pub strain: Option<String>,
    pub stage: Option<String>,
    pub tent: Option<String>,
    pub planted_date: Option<String>,
    pub expected_harvest: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewActivityLog {
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

#[derive(Debug, Clone, Default)]
pub struct NewEnvironmentLog {
    pub tent: Option<String>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub vpd: Option<f64>,
    pub co2: Option<f64>,
    pub notes: Option<String>,
    pub logged_at: Option<String>,
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

pub fn fetch_plant(conn: &Connection, plant_id: i64) -> Result<Plant> {
    let sql = format!("SELECT {} FROM plants WHERE id = ?1", Plant::COLUMNS);
    conn.query_row(&sql, [plant_id], Plant::from_row)
        .optional()?
        .ok_or(GrowError::PlantNotFound(plant_id))
}

pub fn insert_plant(conn: &Connection, new: &NewPlant) -> Result<Plant> {
    let stage = new.stage.as_deref().unwrap_or("seedling");
    conn.execute(
        "INSERT INTO plants (name, strain, stage, tent, planted_date, expected_harvest, notes, archived, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, ?8)",
        params![
            new.name,
            new.strain,
            stage,
            new.tent,
            new.planted_date,
            new.expected_harvest,
            new.notes,
            now_rfc3339(),
        ],
    )?;
    fetch_plant(conn, conn.last_insert_rowid())
}

/// Record an activity entry. The plant must exist and still be live.
pub fn insert_activity_log(conn: &Connection, new: &NewActivityLog) -> Result<ActivityLog> {
    let plant = fetch_plant(conn, new.plant_id)?;
    if plant.archived {
        return Err(GrowError::PlantAlreadyArchived(plant.id));
    }

    let logged_at = new.logged_at.clone().unwrap_or_else(now_rfc3339);
    conn.execute(
        "INSERT INTO activity_logs (plant_id, activity_type, description, value, notes,
             ph, ec, temperature, humidity, water_amount, height, nutrient_info, photo, logged_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            new.plant_id,
            new.activity_type,
            new.description,
            new.value,
            new.notes,
            new.ph,
            new.ec,
            new.temperature,
            new.humidity,
            new.water_amount,
            new.height,
            new.nutrient_info,
            new.photo,
            logged_at,
        ],
    )?;

    let sql = format!(
        "SELECT {} FROM activity_logs WHERE id = ?1",
        ActivityLog::COLUMNS
    );
    let log = conn.query_row(&sql, [conn.last_insert_rowid()], ActivityLog::from_row)?;
    Ok(log)
}

pub fn insert_environment_log(conn: &Connection, new: &NewEnvironmentLog) -> Result<EnvironmentLog> {
    let logged_at = new.logged_at.clone().unwrap_or_else(now_rfc3339);
    conn.execute(
        "INSERT INTO environment_logs (tent, temperature, humidity, vpd, co2, notes, logged_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            new.tent,
            new.temperature,
            new.humidity,
            new.vpd,
            new.co2,
            new.notes,
            logged_at,
        ],
    )?;

    let sql = format!(
        "SELECT {} FROM environment_logs WHERE id = ?1",
        EnvironmentLog::COLUMNS
    );
    let log = conn.query_row(&sql, [conn.last_insert_rowid()], EnvironmentLog::from_row)?;
    Ok(log)
}
