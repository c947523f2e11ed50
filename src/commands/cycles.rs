use anyhow::Result;

use crate::commands::{CommandReport, open_store};
use crate::grow::aggregate::cycles_for_tent;

#[derive(Debug, Clone)]
pub struct CyclesOptions {
    pub tent: String,
}

pub fn run(opts: &CyclesOptions) -> Result<CommandReport> {
    let store = open_store()?;
    let report = CommandReport::new("cycles");

    let cycles = cycles_for_tent(&store.conn, &opts.tent)?;
    println!("{}", serde_json::to_string_pretty(&cycles)?);

    Ok(report)
}
