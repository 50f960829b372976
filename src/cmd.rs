//! Command implementations for the CLI interface.
//!
//! Every mutating command follows the same shape: mutate the in-memory
//! [`DayState`], then persist through [`db::save_day`], which reloads the
//! stored blob and merges only the active date's slices back into it.

use std::path::Path;

use chrono::Local;
use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::day::DayState;
use crate::db;
use crate::fields::{format_flower_kind, format_status, Status};
use crate::garden::{flower_at, flower_emoji, GRID_COLUMNS, GRID_ROWS};

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task for today.
    Add {
        /// Short title for the task.
        title: String,
        /// Difficulty tier: 1 (easy), 2 (medium), 3 (challenging).
        #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
        difficulty: u8,
    },

    /// List today's tasks, most recent first.
    List {
        /// Include completed tasks.
        #[arg(long)]
        all: bool,
    },

    /// Complete a task and plant its reward flower.
    Complete {
        /// Task ID to complete.
        id: u64,
    },

    /// Render today's 6x4 garden grid.
    Garden,

    /// View a planted flower and the task it rewards.
    View {
        /// Flower ID to view.
        id: u64,
    },

    /// Clear all of today's tasks and flowers. Other days are untouched.
    Reset,

    /// Show the daily reflection prompts.
    Journal,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn save_or_exit(day: &DayState, db_path: &Path) {
    if let Err(e) = db::save_day(db_path, &day.date, day.tasks.clone(), day.flowers.clone()) {
        eprintln!("Failed to save garden data: {e}");
        std::process::exit(1);
    }
}

/// Add a new pending task for the active day.
pub fn cmd_add(day: &mut DayState, db_path: &Path, title: String, difficulty: u8) {
    let Some((id, title)) = day
        .add_task(&title, difficulty)
        .map(|t| (t.id, t.title.clone()))
    else {
        // Blank input is declined, not an error.
        println!("Nothing added: the task title is empty.");
        return;
    };
    save_or_exit(day, db_path);
    println!("Added task {id}: {title} (difficulty {difficulty})");
}

/// List the active day's tasks in a table.
pub fn cmd_list(day: &DayState, all: bool) {
    println!(
        "{} tasks, {} flowers for {}",
        day.tasks.len(),
        day.flowers.len(),
        day.date
    );

    let rows: Vec<_> = day
        .tasks
        .iter()
        .filter(|t| all || t.status != Status::Completed)
        .collect();
    if rows.is_empty() {
        println!("No tasks yet. Add one to plant your first flower.");
        return;
    }

    println!("{:<5} {:<11} {:<5} {}", "ID", "Status", "Diff", "Title");
    for t in rows {
        let bloom = day
            .flowers
            .iter()
            .find(|f| f.task_id == t.id)
            .map(|f| format!("  {}", flower_emoji(f.kind)))
            .unwrap_or_default();
        println!(
            "{:<5} {:<11} {:<5} {}{}",
            t.id,
            format_status(t.status),
            t.difficulty,
            t.title,
            bloom
        );
    }
}

/// Complete a task; plants a flower when the task is newly completed and
/// the grid still has a free plot.
pub fn cmd_complete(day: &mut DayState, db_path: &Path, id: u64) {
    let Some(before) = day.tasks.iter().find(|t| t.id == id).map(|t| t.status) else {
        println!("No task with ID {id} for {}.", day.date);
        return;
    };
    if before == Status::Completed {
        println!("Task {id} is already completed.");
        return;
    }

    day.complete_task(id);
    save_or_exit(day, db_path);

    match day.flowers.iter().find(|f| f.task_id == id) {
        Some(f) => println!(
            "Task {id} completed. Planted a {} {} at ({}, {}).",
            flower_emoji(f.kind),
            format_flower_kind(f.kind),
            f.x,
            f.y
        ),
        None => println!("Task {id} completed. The garden is full, so no new bloom today."),
    }
}

/// Render the garden grid with a legend and the planted blooms.
pub fn cmd_garden(day: &DayState) {
    println!("Garden for {}", day.date);
    for y in 0..GRID_ROWS {
        let mut row = String::new();
        for x in 0..GRID_COLUMNS {
            match flower_at(&day.flowers, x, y) {
                Some(f) => row.push_str(&format!(" {} ", flower_emoji(f.kind))),
                None => row.push_str(" . "),
            }
        }
        println!("{row}");
    }
    println!("Daisy 🌼 = easy, Tulip 🌷 = medium, Rose 🌹 = challenging.");

    if day.flowers.is_empty() {
        println!("No blooms yet. Complete a task to plant one.");
        return;
    }
    println!();
    for f in &day.flowers {
        println!(
            "{:<5} {} {:<6} at ({}, {})",
            f.id,
            flower_emoji(f.kind),
            format_flower_kind(f.kind),
            f.x,
            f.y
        );
    }
}

/// Show a flower's details together with the task it rewards.
pub fn cmd_view(day: &DayState, id: u64) {
    let Some(flower) = day.flower(id) else {
        println!("No flower with ID {id} for {}.", day.date);
        return;
    };
    let title = day
        .task_for_flower(id)
        .map(|t| t.title.clone())
        .unwrap_or_else(|| "Unknown task".to_string());
    let planted = flower
        .created_at
        .with_timezone(&Local)
        .format("%H:%M:%S");
    println!("Bloom:    {} {}", flower_emoji(flower.kind), format_flower_kind(flower.kind));
    println!("Task:     {title}");
    println!("Plot:     ({}, {})", flower.x, flower.y);
    println!("Planted:  {planted}");
}

/// Clear the active day.
pub fn cmd_reset(day: &mut DayState, db_path: &Path) {
    day.reset();
    save_or_exit(day, db_path);
    println!("Cleared all tasks and flowers for {}.", day.date);
}

/// Print the reflection prompts. Journaling holds no state in this
/// version; the prompts are the whole feature.
pub fn cmd_journal() {
    println!("What did your garden teach you today?");
    println!("Which habit felt most nourishing?");
}

/// Generate shell completions on stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
