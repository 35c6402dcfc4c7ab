use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use shelf::{Shelf, ShelfConfig, ShelfError};
use tracing::info;

/// Recently added feed and playlist import over a library snapshot.
///
/// The snapshot and all tunables come from `SHELF_*` environment variables.
#[derive(Parser)]
#[command(name = "shelf")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the recently added feed.
    Recent {
        /// Number of items, defaults to SHELF_RECENT_LIMIT
        limit: Option<usize>,
    },
    /// Print tracks added in the last few days, newest first.
    Tracks {
        /// Window in days, defaults to SHELF_RECENT_CUTOFF_DAYS
        days: Option<u32>,
    },
    /// Match an M3U playlist against the library.
    Import { playlist: PathBuf },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = ShelfConfig::from_env()?;
    let shelf = Shelf::from_config(config)?;

    match args.command {
        Command::Recent { limit } => {
            let limit = limit.unwrap_or(shelf.config().recent_limit);
            print_json(&shelf.recent_items(limit))?;
        }
        Command::Tracks { days } => {
            let days = days.unwrap_or(shelf.config().recent_cutoff_days);
            print_json(&shelf.recent_tracks(days))?;
        }
        Command::Import { playlist } => {
            let document = std::fs::read_to_string(&playlist).map_err(|source| ShelfError::Io {
                path: playlist.clone(),
                source,
            })?;
            let report = shelf.import_playlist(&document);
            info!(
                "{:?}: {} matched, {} unresolved",
                playlist,
                report.matched.len(),
                report.unresolved.len()
            );
            print_json(&report)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ShelfError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
