//! Restore write path: rematerialize a live plant from an archive snapshot.
//!
//! Not a true undo. The restored plant gets a new identity, harvest date and
//! final yield are cleared, and restored logs keep only the reduced field
//! set (activity type, description, value, notes, timestamp); measurement
//! fields come back as NULL. Environment copies are never written back to
//! the live telemetry table; they are deleted with the grow row.

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

use crate::error::{GrowError, Result};
use crate::grow::model::ArchivedGrow;

#[derive(Debug, Clone)]
pub struct RestoreOutcome {
    pub new_plant_id: i64,
    pub plant_name: String,
}

pub fn restore_grow(
    conn: &mut Connection,
    archived_grow_id: i64,
    default_stage: &str,
) -> Result<RestoreOutcome> {
    let tx = conn.transaction()?;

    let sql = format!(
        "SELECT {} FROM archived_grows WHERE id = ?1",
        ArchivedGrow::COLUMNS
    );
    let grow = tx
        .query_row(&sql, [archived_grow_id], ArchivedGrow::from_row)
        .optional()?
        .ok_or(GrowError::GrowNotFound(archived_grow_id))?;

    let stage = grow
        .final_stage
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_stage);

    tx.execute(
        "INSERT INTO plants (name, strain, stage, tent, planted_date, expected_harvest, notes, archived, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, NULL, ?6, 0, ?7)",
        params![
            grow.name,
            grow.strain,
            stage,
            grow.tent,
            grow.planted_date,
            grow.notes,
            Utc::now().to_rfc3339(),
        ],
    )?;
    let new_plant_id = tx.last_insert_rowid();

    // Only the reduced field set survives the round trip; the remaining
    // measurement columns stay NULL on the new rows.
    let mut restored_logs = 0usize;
    {
        let mut select = tx.prepare(
            "SELECT activity_type, description, value, notes, logged_at
             FROM archived_logs WHERE archived_grow_id = ?1
             ORDER BY logged_at ASC, id ASC",
        )?;
        let mut insert = tx.prepare_cached(
            "INSERT INTO activity_logs (plant_id, activity_type, description, value, notes, logged_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;

        let rows = select.query_map([archived_grow_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<f64>>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;
        for row in rows {
            let (activity_type, description, value, notes, logged_at) = row?;
            insert.execute(params![
                new_plant_id,
                activity_type,
                description,
                value,
                notes,
                logged_at,
            ])?;
            restored_logs += 1;
        }
    }

    tx.execute(
        "DELETE FROM archived_logs WHERE archived_grow_id = ?1",
        [archived_grow_id],
    )?;
    // Cascade removes the grow's archived environment copies with it.
    tx.execute("DELETE FROM archived_grows WHERE id = ?1", [archived_grow_id])?;

    tx.commit()?;
    tracing::info!(
        archived_grow_id,
        new_plant_id,
        restored_logs,
        "archived grow restored"
    );

    Ok(RestoreOutcome {
        new_plant_id,
        plant_name: grow.name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grow::archive::{ArchiveRequest, archive_plant};
    use crate::grow::db;
    use crate::grow::live::{
        NewActivityLog, NewEnvironmentLog, NewPlant, insert_activity_log, insert_environment_log,
        insert_plant,
    };

    fn archived_grow(conn: &mut Connection) -> (i64, i64) {
        let plant = insert_plant(
            conn,
            &NewPlant {
                name: "Blue Dream #1".to_string(),
                strain: Some("Blue Dream".to_string()),
                stage: Some("flowering".to_string()),
                tent: Some("Tent A".to_string()),
                planted_date: Some("2024-01-15".to_string()),
                ..NewPlant::default()
            },
        )
        .unwrap();

        insert_activity_log(
            conn,
            &NewActivityLog {
                plant_id: plant.id,
                activity_type: "feeding".to_string(),
                description: Some("bloom nutrients".to_string()),
                value: Some(2.0),
                ph: Some(6.1),
                ec: Some(1.8),
                height: Some(80.0),
                logged_at: Some("2024-02-01T08:00:00Z".to_string()),
                ..NewActivityLog::default()
            },
        )
        .unwrap();
        insert_activity_log(
            conn,
            &NewActivityLog {
                plant_id: plant.id,
                activity_type: "watering".to_string(),
                temperature: Some(23.0),
                humidity: Some(50.0),
                logged_at: Some("2024-03-01T08:00:00Z".to_string()),
                ..NewActivityLog::default()
            },
        )
        .unwrap();
        insert_environment_log(
            conn,
            &NewEnvironmentLog {
                tent: Some("Tent A".to_string()),
                temperature: Some(24.0),
                logged_at: Some("2024-02-10T06:00:00Z".to_string()),
                ..NewEnvironmentLog::default()
            },
        )
        .unwrap();

        let original_plant_id = plant.id;
        let outcome = archive_plant(
            conn,
            &ArchiveRequest {
                plant_id: plant.id,
                reason: "harvested".to_string(),
                final_yield: Some(85.5),
                harvest_date: Some("2024-04-20".to_string()),
            },
        )
        .unwrap();
        (outcome.archived_grow_id, original_plant_id)
    }

    #[test]
    fn restore_creates_a_new_identity_with_reduced_logs() {
        let mut conn = db::open_in_memory().unwrap();
        let (grow_id, original_plant_id) = archived_grow(&mut conn);

        let outcome = restore_grow(&mut conn, grow_id, "vegetative").unwrap();
        assert_ne!(outcome.new_plant_id, original_plant_id);
        assert_eq!(outcome.plant_name, "Blue Dream #1");

        let (stage, archived): (String, i64) = conn
            .query_row(
                "SELECT stage, archived FROM plants WHERE id = ?1",
                [outcome.new_plant_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(stage, "flowering", "final_stage survives the round trip");
        assert_eq!(archived, 0);

        let restored: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM activity_logs WHERE plant_id = ?1",
                [outcome.new_plant_id],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(restored, 2, "restored log count equals archived log count");

        // Reduced field set: measurements are gone, the rest survives.
        let (activity, description, value, ph, ec, height): (
            String,
            Option<String>,
            Option<f64>,
            Option<f64>,
            Option<f64>,
            Option<f64>,
        ) = conn
            .query_row(
                "SELECT activity_type, description, value, ph, ec, height
                 FROM activity_logs WHERE plant_id = ?1 ORDER BY logged_at ASC LIMIT 1",
                [outcome.new_plant_id],
                |row| {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                        row.get(5)?,
                    ))
                },
            )
            .unwrap();
        assert_eq!(activity, "feeding");
        assert_eq!(description.as_deref(), Some("bloom nutrients"));
        assert_eq!(value, Some(2.0));
        assert_eq!((ph, ec, height), (None, None, None));
    }

    #[test]
    fn restore_clears_the_archive_record() {
        let mut conn = db::open_in_memory().unwrap();
        let (grow_id, _) = archived_grow(&mut conn);

        restore_grow(&mut conn, grow_id, "vegetative").unwrap();

        let grows: i64 = conn
            .query_row("SELECT COUNT(*) FROM archived_grows", [], |r| r.get(0))
            .unwrap();
        let logs: i64 = conn
            .query_row("SELECT COUNT(*) FROM archived_logs", [], |r| r.get(0))
            .unwrap();
        let env: i64 = conn
            .query_row("SELECT COUNT(*) FROM archived_environment_logs", [], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!((grows, logs, env), (0, 0, 0));
    }

    #[test]
    fn restore_never_writes_back_environment_rows() {
        let mut conn = db::open_in_memory().unwrap();
        let (grow_id, _) = archived_grow(&mut conn);

        let before: i64 = conn
            .query_row("SELECT COUNT(*) FROM environment_logs", [], |r| r.get(0))
            .unwrap();
        restore_grow(&mut conn, grow_id, "vegetative").unwrap();
        let after: i64 = conn
            .query_row("SELECT COUNT(*) FROM environment_logs", [], |r| r.get(0))
            .unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn restoring_a_missing_grow_is_not_found() {
        let mut conn = db::open_in_memory().unwrap();
        let err = restore_grow(&mut conn, 404, "vegetative").unwrap_err();
        assert!(matches!(err, GrowError::GrowNotFound(404)));
    }

    #[test]
    fn missing_final_stage_falls_back_to_the_default() {
        let mut conn = db::open_in_memory().unwrap();
        conn.execute(
            "INSERT INTO archived_grows (original_plant_id, name, reason, final_stage, archived_at)
             VALUES (9, 'Mystery', 'lost tag', NULL, '2024-04-20T00:00:00Z')",
            [],
        )
        .unwrap();

        let outcome = restore_grow(&mut conn, 1, "vegetative").unwrap();
        let stage: String = conn
            .query_row(
                "SELECT stage FROM plants WHERE id = ?1",
                [outcome.new_plant_id],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(stage, "vegetative");
    }
}
