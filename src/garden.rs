//! The flower garden: reward entities and the fixed 6×4 plot grid.
//!
//! Each completed task plants at most one flower. Placement is a
//! deterministic row-major scan so layouts are reproducible: the first
//! bloom of the day always lands at (0, 0), the seventh at (0, 1).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::FlowerKind;

/// Grid width in plots.
pub const GRID_COLUMNS: u8 = 6;
/// Grid height in plots.
pub const GRID_ROWS: u8 = 4;

/// A reward bloom planted when a task is completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flower {
    pub id: u64,
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    /// The task this flower rewards. At most one flower per task, ever.
    pub task_id: u64,
    #[serde(rename = "type")]
    pub kind: FlowerKind,
    pub x: u8,
    pub y: u8,
    pub created_at: DateTime<Utc>,
}

/// Find the first free plot in row-major order (row 0 left to right, then
/// row 1, and so on). Returns `None` when all 24 plots are occupied.
pub fn next_free_plot(flowers: &[Flower]) -> Option<(u8, u8)> {
    for y in 0..GRID_ROWS {
        for x in 0..GRID_COLUMNS {
            let occupied = flowers.iter().any(|f| f.x == x && f.y == y);
            if !occupied {
                return Some((x, y));
            }
        }
    }
    None
}

/// Look up the flower occupying a plot, if any.
pub fn flower_at(flowers: &[Flower], x: u8, y: u8) -> Option<&Flower> {
    flowers.iter().find(|f| f.x == x && f.y == y)
}

/// Emoji used when rendering a flower in the grid.
pub fn flower_emoji(kind: FlowerKind) -> &'static str {
    match kind {
        FlowerKind::Daisy => "🌼",
        FlowerKind::Tulip => "🌷",
        FlowerKind::Rose => "🌹",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flower_on(x: u8, y: u8) -> Flower {
        Flower {
            id: 100 + u64::from(y) * u64::from(GRID_COLUMNS) + u64::from(x),
            date_iso: "2024-05-01".to_string(),
            task_id: 1,
            kind: FlowerKind::Daisy,
            x,
            y,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_garden_allocates_origin() {
        assert_eq!(next_free_plot(&[]), Some((0, 0)));
    }

    #[test]
    fn allocation_walks_rows_left_to_right() {
        let mut flowers = vec![flower_on(0, 0)];
        assert_eq!(next_free_plot(&flowers), Some((1, 0)));

        // Fill the rest of row 0; the seventh bloom starts row 1.
        for x in 1..GRID_COLUMNS {
            flowers.push(flower_on(x, 0));
        }
        assert_eq!(next_free_plot(&flowers), Some((0, 1)));
    }

    #[test]
    fn allocation_fills_gaps_first() {
        let flowers: Vec<Flower> = (0..GRID_COLUMNS)
            .filter(|&x| x != 3)
            .map(|x| flower_on(x, 0))
            .collect();
        assert_eq!(next_free_plot(&flowers), Some((3, 0)));
    }

    #[test]
    fn full_grid_allocates_nothing() {
        let mut flowers = Vec::new();
        for y in 0..GRID_ROWS {
            for x in 0..GRID_COLUMNS {
                flowers.push(flower_on(x, y));
            }
        }
        assert_eq!(flowers.len(), 24);
        assert_eq!(next_free_plot(&flowers), None);
    }

    #[test]
    fn occupancy_lookup_joins_on_coordinates() {
        let flowers = vec![flower_on(2, 1), flower_on(5, 3)];
        assert_eq!(flower_at(&flowers, 2, 1).map(|f| f.id), Some(flowers[0].id));
        assert!(flower_at(&flowers, 0, 0).is_none());
    }
}
