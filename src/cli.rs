use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed daily task garden CLI.
/// Storage defaults to ~/.bloom/garden.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "bloom", version, about = "Daily tasks that grow a flower garden")]
pub struct Cli {
    /// Path to the JSON garden file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
