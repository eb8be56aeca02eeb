use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::board::Board;
use crate::snapshot::StatsSnapshot;

mod board;
mod charts;
mod config;
mod error;
mod members;
mod project_type;
mod snapshot;

#[derive(Parser)]
#[command(version, about = "Shapes contribution statistics into chart-ready data")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the board JSON from a stats snapshot
    Board {
        /// Snapshot file. Reads stdin if not given
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Export group members as CSV
    Members {
        /// Snapshot file. Reads stdin if not given
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// CSV destination. Writes stdout if not given
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the effective board config as TOML
    Config,
}

fn main() -> Result<()> {
    shared::init_tracing!()?;
    let app = shared::load_app_config!()?;
    let cli = Cli::parse();

    let board_config = config::load(&app.board_config_path).with_context(|| {
        format!(
            "Failed to load board config from {}",
            app.board_config_path.display()
        )
    })?;

    match cli.command {
        Command::Board { input, pretty } => {
            let snapshot = read_snapshot(input.as_deref())?;
            let board = Board::build(&snapshot, &board_config);

            let stdout = io::stdout().lock();
            let mut out = BufWriter::new(stdout);
            if pretty {
                serde_json::to_writer_pretty(&mut out, &board)?;
            } else {
                serde_json::to_writer(&mut out, &board)?;
            }
            writeln!(out)?;
            out.flush()?;
        }
        Command::Members { input, output } => {
            let snapshot = read_snapshot(input.as_deref())?;
            let Some(members) = snapshot.user_stats.as_deref() else {
                warn!("snapshot has no userStats; nothing to export");
                return Ok(());
            };

            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    members::write_csv(members, BufWriter::new(file))?;
                    info!(count = members.len(), path = %path.display(), "exported members");
                }
                None => members::write_csv(members, io::stdout().lock())?,
            }
        }
        Command::Config => {
            print!("{}", config::to_toml(&board_config)?);
        }
    }

    Ok(())
}

fn read_snapshot(input: Option<&Path>) -> Result<StatsSnapshot> {
    match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            StatsSnapshot::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to read snapshot from {}", path.display()))
        }
        None => StatsSnapshot::from_reader(io::stdin().lock())
            .context("Failed to read snapshot from stdin"),
    }
}
