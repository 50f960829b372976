//! Enumerations and field types shared across the crate.
//!
//! This module defines the task status lifecycle, the flower varieties a
//! completed task can grow into, and the fixed difficulty-to-flower mapping.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Task completion status. Transitions are one-way: pending → completed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Completed,
}

/// Flower varieties, one per difficulty tier.
///
/// Variant names are stored as-is in the persisted blob ("Daisy", "Tulip",
/// "Rose"), so blobs written by earlier versions of the app load unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlowerKind {
    Daisy,
    Tulip,
    Rose,
}

/// Map a task's difficulty tier to the flower it grows.
///
/// 1 → Daisy, 2 → Tulip, 3 → Rose. The CLI only accepts 1–3, but a
/// hand-edited blob may hold anything, so unknown tiers fall back to Daisy
/// rather than failing.
pub fn flower_for_difficulty(difficulty: u8) -> FlowerKind {
    match difficulty {
        2 => FlowerKind::Tulip,
        3 => FlowerKind::Rose,
        _ => FlowerKind::Daisy,
    }
}

/// Format a status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Pending => "Pending",
        Status::Completed => "Completed",
    }
}

/// Format a flower kind for display.
pub fn format_flower_kind(k: FlowerKind) -> &'static str {
    match k {
        FlowerKind::Daisy => "Daisy",
        FlowerKind::Tulip => "Tulip",
        FlowerKind::Rose => "Rose",
    }
}
