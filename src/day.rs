//! In-memory state for the active day.
//!
//! A session resolves "today" exactly once at startup and operates on that
//! date's task and flower slices for its whole lifetime. All mutations go
//! through [`DayState`]; persistence is the caller's job via
//! [`crate::db::save_day`].

use chrono::{Local, Utc};

use crate::db::Snapshot;
use crate::fields::{flower_for_difficulty, Status};
use crate::garden::{next_free_plot, Flower};
use crate::task::Task;

/// Canonical `YYYY-MM-DD` key for today in the local civil calendar.
///
/// `Local` applies the timezone offset before taking the date, so a user
/// west of UTC working late in the evening still gets their own day, not
/// tomorrow's UTC date. Resolved once per session and held fixed; a
/// session running past midnight keeps the day it started with.
pub fn today_key() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// The active date's tasks and flowers, plus the ID counter for new
/// records (seeded from the whole snapshot so IDs stay globally unique).
#[derive(Debug)]
pub struct DayState {
    pub date: String,
    pub tasks: Vec<Task>,
    pub flowers: Vec<Flower>,
    next_id: u64,
}

impl DayState {
    /// Select one date's slice out of a loaded snapshot.
    pub fn open(snapshot: &Snapshot, date: &str) -> Self {
        DayState {
            date: date.to_string(),
            tasks: snapshot.day_tasks(date),
            flowers: snapshot.day_flowers(date),
            next_id: snapshot.next_id(),
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create a new pending task and prepend it (most-recent-first order).
    /// Returns `None` without creating anything when the trimmed title is
    /// empty; blank input is left for correction, not treated as an error.
    pub fn add_task(&mut self, title: &str, difficulty: u8) -> Option<&Task> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return None;
        }
        let task = Task {
            id: self.take_id(),
            title: trimmed.to_string(),
            difficulty,
            date_iso: self.date.clone(),
            status: Status::Pending,
            completed_at: None,
        };
        self.tasks.insert(0, task);
        self.tasks.first()
    }

    /// Mark a task completed and plant its reward flower.
    ///
    /// Idempotent: an unknown ID or an already-completed task is a no-op.
    /// The flower is skipped (but the completion kept) in two cases: a
    /// flower for this task already exists, or the grid has no free plot
    /// left. Grid exhaustion is deliberate silent policy: the 25th
    /// completion of a day goes unrewarded.
    pub fn complete_task(&mut self, task_id: u64) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return;
        };
        if task.status == Status::Completed {
            return;
        }
        let completed_at = Utc::now();
        task.status = Status::Completed;
        task.completed_at = Some(completed_at);
        let difficulty = task.difficulty;

        if self.flowers.iter().any(|f| f.task_id == task_id) {
            return;
        }
        let Some((x, y)) = next_free_plot(&self.flowers) else {
            return;
        };
        let flower = Flower {
            id: self.take_id(),
            date_iso: self.date.clone(),
            task_id,
            kind: flower_for_difficulty(difficulty),
            x,
            y,
            created_at: completed_at,
        };
        self.flowers.push(flower);
    }

    /// Clear all tasks and flowers for the active date. Other dates live
    /// in the snapshot, not here, so they are unaffected by construction.
    pub fn reset(&mut self) {
        self.tasks.clear();
        self.flowers.clear();
    }

    /// Look up a flower by ID.
    pub fn flower(&self, flower_id: u64) -> Option<&Flower> {
        self.flowers.iter().find(|f| f.id == flower_id)
    }

    /// Join a flower back to the task it rewards. Derived on demand
    /// rather than stored, so it can never drift out of sync.
    pub fn task_for_flower(&self, flower_id: u64) -> Option<&Task> {
        let flower = self.flower(flower_id)?;
        self.tasks.iter().find(|t| t.id == flower.task_id)
    }
}
