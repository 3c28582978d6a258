use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "homeward")]
#[command(about = "Inspect captured housing teleport data")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the territory reference table
    Territories {
        /// Capture file to read
        capture: PathBuf,
    },
    /// List the aetheryte reference table
    Aetherytes {
        capture: PathBuf,
    },
    /// List the classified teleport locations
    Locations {
        capture: PathBuf,
        /// Only show housing locations
        #[arg(long)]
        houses: bool,
    },
    /// Classify which house the captured position is in
    Whereami {
        capture: PathBuf,
    },
    /// Decode the captured free-company info blob
    Fc {
        capture: PathBuf,
    },
    /// Export the classified teleport locations
    Export {
        capture: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: commands::export::Format,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("homeward_core=info".parse()?)
                .add_directive("homeward_cli=info".parse()?),
        )
        .init();

    let args = Args::parse();
    debug!("homeward {} starting", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Territories { capture } => commands::territories::run(&capture),
        Command::Aetherytes { capture } => commands::aetherytes::run(&capture),
        Command::Locations { capture, houses } => commands::locations::run(&capture, houses),
        Command::Whereami { capture } => commands::whereami::run(&capture),
        Command::Fc { capture } => commands::fc::run(&capture),
        Command::Export {
            capture,
            format,
            output,
        } => commands::export::run(&capture, format, output.as_deref()),
    }
}
