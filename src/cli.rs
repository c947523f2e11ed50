use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{self, CommandReport};
use crate::error::{ErrorKind, GrowError};

#[derive(Debug, Parser)]
#[command(
    name = "verdant",
    version,
    about = "Grow-cycle archival engine: archive finished plants, restore them, export tent history"
)]
struct Cli {
    /// Print command reports as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a live plant in the workspace.
    AddPlant {
        #[arg(long)]
        name: String,
        #[arg(long)]
        strain: Option<String>,
        #[arg(long)]
        stage: Option<String>,
        #[arg(long)]
        tent: Option<String>,
        #[arg(long)]
        planted_date: Option<String>,
        #[arg(long)]
        expected_harvest: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Record an activity log entry for a live plant.
    Log {
        #[arg(long)]
        plant: i64,
        #[arg(long)]
        activity: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        value: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        ph: Option<f64>,
        #[arg(long)]
        ec: Option<f64>,
        #[arg(long)]
        temperature: Option<f64>,
        #[arg(long)]
        humidity: Option<f64>,
        #[arg(long)]
        water_amount: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        #[arg(long)]
        nutrient_info: Option<String>,
        #[arg(long)]
        photo: Option<String>,
        #[arg(long)]
        logged_at: Option<String>,
    },
    /// Record a tent environment reading.
    EnvLog {
        #[arg(long)]
        tent: Option<String>,
        #[arg(long)]
        temperature: Option<f64>,
        #[arg(long)]
        humidity: Option<f64>,
        #[arg(long)]
        vpd: Option<f64>,
        #[arg(long)]
        co2: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        logged_at: Option<String>,
    },
    /// Archive a live plant into an immutable grow snapshot.
    Archive {
        #[arg(long)]
        plant: i64,
        #[arg(long)]
        reason: String,
        #[arg(long)]
        final_yield: Option<f64>,
        #[arg(long)]
        harvest_date: Option<String>,
    },
    /// Rematerialize a live plant from an archived grow.
    Restore {
        #[arg(long)]
        grow: i64,
    },
    /// Export a tent's full archive as a flat text document.
    Export {
        #[arg(long)]
        tent: String,
        /// Write the document here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a tent's archived grow cycles as JSON.
    Cycles {
        #[arg(long)]
        tent: String,
    },
    /// Show resolved paths and table counts.
    Status,
}

fn dispatch(command: Command) -> Result<CommandReport> {
    match command {
        Command::AddPlant {
            name,
            strain,
            stage,
            tent,
            planted_date,
            expected_harvest,
            notes,
        } => commands::add_plant::run(&commands::add_plant::AddPlantOptions {
            name,
            strain,
            stage,
            tent,
            planted_date,
            expected_harvest,
            notes,
        }),
        Command::Log {
            plant,
            activity,
            description,
            value,
            notes,
            ph,
            ec,
            temperature,
            humidity,
            water_amount,
            height,
            nutrient_info,
            photo,
            logged_at,
        } => commands::log_activity::run(&commands::log_activity::LogActivityOptions {
            plant_id: plant,
            activity_type: activity,
            description,
            value,
            notes,
            ph,
            ec,
            temperature,
            humidity,
            water_amount,
            height,
            nutrient_info,
            photo,
            logged_at,
        }),
        Command::EnvLog {
            tent,
            temperature,
            humidity,
            vpd,
            co2,
            notes,
            logged_at,
        } => commands::log_environment::run(&commands::log_environment::LogEnvironmentOptions {
            tent,
            temperature,
            humidity,
            vpd,
            co2,
            notes,
            logged_at,
        }),
        Command::Archive {
            plant,
            reason,
            final_yield,
            harvest_date,
        } => commands::archive::run(&commands::archive::ArchiveOptions {
            plant_id: plant,
            reason,
            final_yield,
            harvest_date,
        }),
        Command::Restore { grow } => commands::restore::run(&commands::restore::RestoreOptions {
            archived_grow_id: grow,
        }),
        Command::Export { tent, out } => {
            commands::export::run(&commands::export::ExportOptions { tent, out })
        }
        Command::Cycles { tent } => commands::cycles::run(&commands::cycles::CyclesOptions { tent }),
        Command::Status => commands::status::run(),
    }
}

fn print_report(report: &CommandReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    for detail in &report.details {
        println!("{detail}");
    }
    for issue in &report.issues {
        eprintln!("issue: {issue}");
    }
    Ok(())
}

fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::NotFound => 2,
        ErrorKind::Conflict => 3,
        ErrorKind::Internal => 1,
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match dispatch(cli.command) {
        Ok(report) => {
            print_report(&report, cli.json)?;
            if !report.ok {
                process::exit(1);
            }
            Ok(())
        }
        Err(err) => {
            if let Some(grow_err) = err.downcast_ref::<GrowError>() {
                eprintln!("error[{}]: {grow_err}", grow_err.kind().as_str());
                process::exit(exit_code(grow_err.kind()));
            }
            Err(err)
        }
    }
}
