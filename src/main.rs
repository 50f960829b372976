//! # Bloom - Daily Task Garden CLI
//!
//! A cozy command-line task tracker that converts completed tasks into
//! flowers planted on a fixed 6x4 garden grid, one garden per calendar day.
//!
//! ## How it works
//!
//! - **Tasks**: each task belongs to today and carries a difficulty tier
//!   (1-3). Completing a task is one-way; there is no reopen.
//! - **Rewards**: completion plants a flower in the first free plot,
//!   scanning the grid row by row. Difficulty picks the variety:
//!   1 → Daisy 🌼, 2 → Tulip 🌷, 3 → Rose 🌹.
//! - **Days**: all state is partitioned by local calendar date. Commands
//!   only ever touch today's slice; history stays intact, and `reset`
//!   clears today only.
//! - **Storage**: one JSON file holding every day's tasks and flowers.
//!   Writes merge into the stored blob rather than replacing it, so a
//!   session working on today can never clobber another day's garden.
//!
//! ## Quick start
//!
//! ```bash
//! # Add a task for today
//! bloom add "Stretch" --difficulty 1
//!
//! # See today's tasks
//! bloom list
//!
//! # Complete one and plant its flower
//! bloom complete 1
//!
//! # Admire the garden
//! bloom garden
//! ```
//!
//! Data is stored locally in `~/.bloom/garden.json`; pass `--db` to use a
//! different file.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod day;
pub mod db;
pub mod fields;
pub mod garden;
pub mod task;

use cli::Cli;
use cmd::Commands;
use day::DayState;
use db::Snapshot;

fn main() {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = &cli.command {
        cmd::cmd_completions(*shell);
        return;
    }

    // Determine the garden file to use.
    let db_path = cli.db.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let bloom_dir = PathBuf::from(home).join(".bloom");
        if let Err(e) = std::fs::create_dir_all(&bloom_dir) {
            eprintln!("Failed to create bloom directory {}: {}", bloom_dir.display(), e);
            std::process::exit(1);
        }
        bloom_dir.join("garden.json")
    });

    // The active day is resolved once per invocation and held fixed.
    let today = day::today_key();
    let snapshot = Snapshot::load(&db_path);
    let mut day_state = DayState::open(&snapshot, &today);

    match cli.command {
        Commands::Completions { .. } => unreachable!("completions handled above"),

        Commands::Add { title, difficulty } => {
            cmd::cmd_add(&mut day_state, &db_path, title, difficulty)
        }

        Commands::List { all } => cmd::cmd_list(&day_state, all),

        Commands::Complete { id } => cmd::cmd_complete(&mut day_state, &db_path, id),

        Commands::Garden => cmd::cmd_garden(&day_state),

        Commands::View { id } => cmd::cmd_view(&day_state, id),

        Commands::Reset => cmd::cmd_reset(&mut day_state, &db_path),

        Commands::Journal => cmd::cmd_journal(),
    }
}
