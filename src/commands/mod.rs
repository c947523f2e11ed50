pub mod add_plant;
pub mod archive;
pub mod cycles;
pub mod export;
pub mod log_activity;
pub mod log_environment;
pub mod restore;
pub mod status;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Serialize;

use crate::grow::config::{VerdantConfig, load_config};
use crate::grow::db;
use crate::grow::paths::resolve_paths;

#[derive(Debug, Clone, Serialize)]
pub struct CommandReport {
    pub command: String,
    pub ok: bool,
    pub details: Vec<String>,
    pub issues: Vec<String>,
}

impl CommandReport {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ok: true,
            details: Vec::new(),
            issues: Vec::new(),
        }
    }

    pub fn detail(&mut self, text: impl Into<String>) {
        self.details.push(text.into());
    }

    pub fn issue(&mut self, text: impl Into<String>) {
        self.ok = false;
        self.issues.push(text.into());
    }
}

/// Configuration plus an open connection to the resolved database.
pub struct Store {
    pub conn: Connection,
    pub db_path: PathBuf,
    pub config: VerdantConfig,
}

fn env_is_set(var: &str) -> bool {
    env::var(var).is_ok_and(|v| !v.trim().is_empty())
}

/// Database location precedence: `VERDANT_DB`, then the config file, then
/// `$VERDANT_HOME/grow.sqlite`.
pub fn resolve_db_path(config: &VerdantConfig) -> Result<PathBuf> {
    let paths = resolve_paths()?;
    if env_is_set("VERDANT_DB") {
        return Ok(paths.db_path);
    }
    if let Some(path) = config.database.path.as_deref() {
        return Ok(PathBuf::from(path));
    }
    Ok(paths.db_path)
}

pub fn open_store() -> Result<Store> {
    let config = load_config()?;
    let db_path = resolve_db_path(&config)?;
    let conn = db::open(&db_path)
        .with_context(|| format!("failed to open grow database {}", db_path.display()))?;
    Ok(Store {
        conn,
        db_path,
        config,
    })
}
