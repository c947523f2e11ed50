use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::commands::{CommandReport, open_store};
use crate::grow::export::export_tent_archive;

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub tent: String,
    pub out: Option<PathBuf>,
}

pub fn run(opts: &ExportOptions) -> Result<CommandReport> {
    let store = open_store()?;
    let mut report = CommandReport::new("export");

    let document = export_tent_archive(&store.conn, &opts.tent)?;

    match &opts.out {
        Some(path) => {
            fs::write(path, &document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            report.detail(format!("tent={}", opts.tent));
            report.detail(format!("written={}", path.display()));
            report.detail(format!("bytes={}", document.len()));
        }
        None => {
            // The document itself is the command output; keep the report
            // empty so nothing trails it on stdout.
            print!("{document}");
        }
    }

    Ok(report)
}
