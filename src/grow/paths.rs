use anyhow::Result;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct VerdantPaths {
    pub verdant_home: PathBuf,
    pub db_path: PathBuf,
}

fn required_home_dir() -> Result<PathBuf> {
    if let Some(home) = dirs::home_dir() {
        return Ok(home);
    }
    Err(anyhow::anyhow!("HOME directory could not be resolved"))
}

fn env_or_default_path(var: &str, fallback: PathBuf) -> PathBuf {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => PathBuf::from(v.trim()),
        _ => fallback,
    }
}

pub fn resolve_paths() -> Result<VerdantPaths> {
    let home = required_home_dir()?;
    let verdant_home = env_or_default_path("VERDANT_HOME", home.join(".verdant"));
    let db_path = env_or_default_path("VERDANT_DB", verdant_home.join("grow.sqlite"));

    Ok(VerdantPaths {
        verdant_home,
        db_path,
    })
}
