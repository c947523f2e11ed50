use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::grow::model::STAGES;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Optional database location; `VERDANT_DB` still wins over this.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreConfig {
    /// Stage given to a restored plant whose snapshot has no final stage.
    pub default_stage: String,
}

impl Default for RestoreConfig {
    fn default() -> Self {
        Self {
            default_stage: "vegetative".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VerdantConfig {
    pub database: DatabaseConfig,
    pub restore: RestoreConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct PartialVerdantConfig {
    database: Option<DatabaseConfig>,
    restore: Option<RestoreConfig>,
}

fn env_or_string(var: &str, fallback: &str) -> String {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => fallback.to_string(),
    }
}

fn validate(cfg: &VerdantConfig) -> Result<()> {
    let stage = cfg.restore.default_stage.as_str();
    if !STAGES.contains(&stage) {
        return Err(anyhow!(
            "invalid restore default stage `{stage}`: use one of {}",
            STAGES.join(", ")
        ));
    }
    Ok(())
}

fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(custom) = env::var("VERDANT_CONFIG_PATH") {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    let home = dirs::home_dir()?;
    Some(home.join(".verdant").join("verdant.toml"))
}

fn merge_file_config(base: &mut VerdantConfig) -> Result<()> {
    let Some(path) = resolve_config_path() else {
        return Ok(());
    };
    if !path.exists() {
        return Ok(());
    }

    let raw = fs::read_to_string(&path)?;
    let parsed: PartialVerdantConfig = toml::from_str(&raw)
        .map_err(|err| anyhow!("failed to parse config {}: {err}", path.display()))?;
    if let Some(database) = parsed.database {
        base.database = database;
    }
    if let Some(restore) = parsed.restore {
        base.restore = restore;
    }
    Ok(())
}

pub fn load_config() -> Result<VerdantConfig> {
    let mut cfg = VerdantConfig::default();
    merge_file_config(&mut cfg)?;

    cfg.restore.default_stage = env_or_string(
        "VERDANT_RESTORE_DEFAULT_STAGE",
        &cfg.restore.default_stage,
    );

    validate(&cfg)?;
    Ok(cfg)
}
