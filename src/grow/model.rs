use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// Cultivation stages a live plant can be in. Also the allowed values for
/// the configured restore fallback stage.
pub const STAGES: &[&str] = &[
    "seedling",
    "vegetative",
    "flowering",
    "drying",
    "curing",
    "harvested",
];

/// A live plant in the workspace. Deleted entirely once archived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    pub strain: Option<String>,
    pub stage: String,
    pub tent: Option<String>,
    pub planted_date: Option<String>,
    pub expected_harvest: Option<String>,
    pub notes: Option<String>,
    pub archived: bool,
    pub created_at: String,
}

impl Plant {
    pub const COLUMNS: &'static str =
        "id, name, strain, stage, tent, planted_date, expected_harvest, notes, archived, created_at";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            strain: row.get(2)?,
            stage: row.get(3)?,
            tent: row.get(4)?,
            planted_date: row.get(5)?,
            expected_harvest: row.get(6)?,
            notes: row.get(7)?,
            archived: row.get::<_, i64>(8)? != 0,
            created_at: row.get(9)?,
        })
    }
}

/// A time-stamped activity entry for one live plant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: i64,
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
    pub logged_at: String,
}

impl ActivityLog {
    pub const COLUMNS: &'static str = "id, plant_id, activity_type, description, value, notes, \
         ph, ec, temperature, humidity, water_amount, height, nutrient_info, photo, logged_at";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            plant_id: row.get(1)?,
            activity_type: row.get(2)?,
            description: row.get(3)?,
            value: row.get(4)?,
            notes: row.get(5)?,
            ph: row.get(6)?,
            ec: row.get(7)?,
            temperature: row.get(8)?,
            humidity: row.get(9)?,
            water_amount: row.get(10)?,
            height: row.get(11)?,
            nutrient_info: row.get(12)?,
            photo: row.get(13)?,
            logged_at: row.get(14)?,
        })
    }
}

/// Tent-level telemetry. Shared ambient data, never owned by one plant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentLog {
    pub id: i64,
    pub tent: Option<String>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub vpd: Option<f64>,
    pub co2: Option<f64>,
    pub notes: Option<String>,
    pub logged_at: String,
}

impl EnvironmentLog {
    pub const COLUMNS: &'static str = "id, tent, temperature, humidity, vpd, co2, notes, logged_at";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            tent: row.get(1)?,
            temperature: row.get(2)?,
            humidity: row.get(3)?,
            vpd: row.get(4)?,
            co2: row.get(5)?,
            notes: row.get(6)?,
            logged_at: row.get(7)?,
        })
    }
}

/// Immutable snapshot of one finished cultivation cycle.
///
/// `original_plant_id` is provenance only; the live row it named is gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivedGrow {
    pub id: i64,
    pub original_plant_id: i64,
    pub name: String,
    pub strain: Option<String>,
    pub tent: Option<String>,
    pub planted_date: Option<String>,
    pub harvest_date: Option<String>,
    pub final_yield: Option<f64>,
    pub reason: String,
    pub final_stage: Option<String>,
    pub notes: Option<String>,
    pub grow_cycle_key: Option<String>,
    pub total_logs: i64,
    pub archived_at: String,
}

impl ArchivedGrow {
    pub const COLUMNS: &'static str = "id, original_plant_id, name, strain, tent, planted_date, \
         harvest_date, final_yield, reason, final_stage, notes, grow_cycle_key, total_logs, archived_at";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            original_plant_id: row.get(1)?,
            name: row.get(2)?,
            strain: row.get(3)?,
            tent: row.get(4)?,
            planted_date: row.get(5)?,
            harvest_date: row.get(6)?,
            final_yield: row.get(7)?,
            reason: row.get(8)?,
            final_stage: row.get(9)?,
            notes: row.get(10)?,
            grow_cycle_key: row.get(11)?,
            total_logs: row.get(12)?,
            archived_at: row.get(13)?,
        })
    }
}

/// Archived copy of an activity log, linked to its grow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivedActivityLog {
    pub id: i64,
    pub archived_grow_id: i64,
    pub original_log_id: i64,
    pub original_plant_id: i64,
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
    pub logged_at: String,
}

impl ArchivedActivityLog {
    pub const COLUMNS: &'static str =
        "id, archived_grow_id, original_log_id, original_plant_id, activity_type, description, \
         value, notes, ph, ec, temperature, humidity, water_amount, height, nutrient_info, photo, logged_at";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            archived_grow_id: row.get(1)?,
            original_log_id: row.get(2)?,
            original_plant_id: row.get(3)?,
            activity_type: row.get(4)?,
            description: row.get(5)?,
            value: row.get(6)?,
            notes: row.get(7)?,
            ph: row.get(8)?,
            ec: row.get(9)?,
            temperature: row.get(10)?,
            humidity: row.get(11)?,
            water_amount: row.get(12)?,
            height: row.get(13)?,
            nutrient_info: row.get(14)?,
            photo: row.get(15)?,
            logged_at: row.get(16)?,
        })
    }
}

/// Archived copy of an environment reading that fell inside a grow's window.
/// The source row in `environment_logs` keeps existing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivedEnvironmentLog {
    pub id: i64,
    pub archived_grow_id: i64,
    pub original_log_id: i64,
    pub tent: Option<String>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub vpd: Option<f64>,
    pub co2: Option<f64>,
    pub notes: Option<String>,
    pub logged_at: String,
}

impl ArchivedEnvironmentLog {
    pub const COLUMNS: &'static str = "id, archived_grow_id, original_log_id, tent, temperature, \
         humidity, vpd, co2, notes, logged_at";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            archived_grow_id: row.get(1)?,
            original_log_id: row.get(2)?,
            tent: row.get(3)?,
            temperature: row.get(4)?,
            humidity: row.get(5)?,
            vpd: row.get(6)?,
            co2: row.get(7)?,
            notes: row.get(8)?,
            logged_at: row.get(9)?,
        })
    }
}
