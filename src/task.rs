//! Task data structure.
//!
//! A task belongs to exactly one calendar date and moves through a one-way
//! lifecycle: created pending, optionally completed once, never reopened.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::Status;

/// A single daily task.
///
/// Field names follow the persisted blob layout (camelCase, `dateISO`),
/// keeping stored gardens readable across versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    /// Difficulty tier, 1 (easy) to 3 (challenging). Decides the flower.
    pub difficulty: u8,
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    pub status: Status,
    /// Set exactly once when the task is completed; `None` while pending.
    pub completed_at: Option<DateTime<Utc>>,
}
