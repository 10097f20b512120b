mod commands;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hab_core::{AppointmentService, HabConfig, JsonFileStore, RecordStore};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hab")]
#[command(about = "Manage hospital appointment bookings")]
struct Cli {
    /// Use this data file instead of the one from config.toml
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data file if it does not exist yet
    Init,
    /// List all appointments, newest first
    List,
    /// Show one appointment by booking reference
    Show {
        /// Booking reference, e.g. "HAB-LQUR1OG0"
        reference: String,
    },
    /// Book a new appointment
    Book(commands::book::BookArgs),
    /// Delete an appointment by numeric id
    Delete { id: i64 },
    /// Export all appointments as CSV
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (service, store) = open_service(cli.data_file)?;

    match cli.command {
        Commands::Init => commands::init::run(store.path()),
        Commands::List => commands::list::run(&service),
        Commands::Show { reference } => commands::show::run(&service, &reference),
        Commands::Book(args) => commands::book::run(&service, args),
        Commands::Delete { id } => commands::delete::run(&service, id),
        Commands::Export { output } => commands::export::run(&service, output.as_deref()),
    }
}

fn open_service(data_file: Option<PathBuf>) -> Result<(AppointmentService, JsonFileStore)> {
    let data_path = match data_file {
        Some(path) => path,
        None => HabConfig::load()?.data_path(),
    };

    let store = JsonFileStore::new(data_path);
    store.ensure_initialized()?;

    Ok((AppointmentService::new(Arc::new(store.clone())), store))
}
