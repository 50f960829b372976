//! Persistent snapshot storage.
//!
//! All state lives in one JSON blob holding every date's tasks and flowers,
//! keyed by `YYYY-MM-DD`. A session only ever works on a single date's
//! slice, so writes go through [`save_day`]: reload the blob from disk,
//! replace just the active date's entries, write the merged result back.
//! That keeps a session holding today's slice from clobbering history.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::garden::Flower;
use crate::task::Task;

/// The full persisted state across all date-keys.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub tasks_by_date: BTreeMap<String, Vec<Task>>,
    #[serde(default)]
    pub flowers_by_date: BTreeMap<String, Vec<Flower>>,
}

impl Snapshot {
    /// Load the snapshot from a JSON file. A missing, unreadable, or
    /// unparsable blob yields an empty snapshot; this never errors out,
    /// matching the recovery rule for corrupt local state.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Snapshot::default();
        }
        let mut buf = String::new();
        match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str(&buf) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    eprintln!("Error parsing garden data, starting fresh: {e}");
                    Snapshot::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading garden data, starting fresh: {e}");
                Snapshot::default()
            }
        }
    }

    /// Save the full snapshot using atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    /// Tasks stored under a date-key, cloned into an owned list.
    pub fn day_tasks(&self, date: &str) -> Vec<Task> {
        self.tasks_by_date.get(date).cloned().unwrap_or_default()
    }

    /// Flowers stored under a date-key, cloned into an owned list.
    pub fn day_flowers(&self, date: &str) -> Vec<Flower> {
        self.flowers_by_date.get(date).cloned().unwrap_or_default()
    }

    /// Generate the next available record ID. Tasks and flowers share one
    /// ID space scanned across every date, so new records never collide
    /// with anything already in the blob.
    pub fn next_id(&self) -> u64 {
        let max_task = self
            .tasks_by_date
            .values()
            .flatten()
            .map(|t| t.id)
            .max()
            .unwrap_or(0);
        let max_flower = self
            .flowers_by_date
            .values()
            .flatten()
            .map(|f| f.id)
            .max()
            .unwrap_or(0);
        max_task.max(max_flower) + 1
    }

    /// Replace one date-key's entries in both maps, leaving every other
    /// date untouched. Empty lists are stored under their key rather than
    /// removed, so a cleared day is visible in the blob as `[]`.
    pub fn merge_day(&mut self, date: &str, tasks: Vec<Task>, flowers: Vec<Flower>) {
        self.tasks_by_date.insert(date.to_string(), tasks);
        self.flowers_by_date.insert(date.to_string(), flowers);
    }
}

/// The write cycle every mutation ends with: reload the blob from disk,
/// merge in the active date's slices, write back. Callers must never save
/// a snapshot built only from their in-memory view.
pub fn save_day(
    path: &Path,
    date: &str,
    tasks: Vec<Task>,
    flowers: Vec<Flower>,
) -> std::io::Result<()> {
    let mut snapshot = Snapshot::load(path);
    snapshot.merge_day(date, tasks, flowers);
    snapshot.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Status;

    fn task(id: u64, date: &str, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            difficulty: 1,
            date_iso: date.to_string(),
            status: Status::Pending,
            completed_at: None,
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::load(&dir.path().join("garden.json"));
        assert!(snapshot.tasks_by_date.is_empty());
        assert!(snapshot.flowers_by_date.is_empty());
    }

    #[test]
    fn corrupt_blob_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garden.json");
        fs::write(&path, "{ not json").unwrap();
        let snapshot = Snapshot::load(&path);
        assert!(snapshot.tasks_by_date.is_empty());

        // Structurally invalid counts as corrupt too.
        fs::write(&path, r#"{"tasksByDate": 7}"#).unwrap();
        let snapshot = Snapshot::load(&path);
        assert!(snapshot.tasks_by_date.is_empty());
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garden.json");

        let mut snapshot = Snapshot::default();
        snapshot.merge_day("2024-05-01", vec![task(1, "2024-05-01", "Stretch")], vec![]);
        snapshot.save(&path).unwrap();

        let loaded = Snapshot::load(&path);
        let tasks = loaded.day_tasks("2024-05-01");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Stretch");
        assert_eq!(loaded.day_flowers("2024-05-01").len(), 0);
    }

    #[test]
    fn blob_uses_camel_case_field_names() {
        let mut snapshot = Snapshot::default();
        snapshot.merge_day("2024-05-01", vec![task(1, "2024-05-01", "Stretch")], vec![]);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"tasksByDate\""));
        assert!(json.contains("\"flowersByDate\""));
        assert!(json.contains("\"dateISO\""));
        assert!(json.contains("\"completedAt\""));
    }

    #[test]
    fn save_day_preserves_other_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garden.json");

        let mut snapshot = Snapshot::default();
        snapshot.merge_day("2024-04-30", vec![task(1, "2024-04-30", "Water plants")], vec![]);
        snapshot.save(&path).unwrap();
        let stored_yesterday = serde_json::to_string(&Snapshot::load(&path).day_tasks("2024-04-30")).unwrap();

        // A session working on May 1st writes its slice.
        save_day(&path, "2024-05-01", vec![task(2, "2024-05-01", "Stretch")], vec![]).unwrap();

        let merged = Snapshot::load(&path);
        assert_eq!(merged.day_tasks("2024-05-01").len(), 1);
        let yesterday_after = serde_json::to_string(&merged.day_tasks("2024-04-30")).unwrap();
        assert_eq!(yesterday_after, stored_yesterday);
    }

    #[test]
    fn save_day_can_clear_a_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garden.json");

        save_day(&path, "2024-05-01", vec![task(1, "2024-05-01", "Stretch")], vec![]).unwrap();
        save_day(&path, "2024-05-01", vec![], vec![]).unwrap();

        let snapshot = Snapshot::load(&path);
        assert!(snapshot.day_tasks("2024-05-01").is_empty());
        // The key stays present with an empty list.
        assert!(snapshot.tasks_by_date.contains_key("2024-05-01"));
    }

    #[test]
    fn next_id_scans_every_date() {
        let mut snapshot = Snapshot::default();
        assert_eq!(snapshot.next_id(), 1);
        snapshot.merge_day("2024-04-30", vec![task(7, "2024-04-30", "Old task")], vec![]);
        snapshot.merge_day("2024-05-01", vec![task(3, "2024-05-01", "Stretch")], vec![]);
        assert_eq!(snapshot.next_id(), 8);
    }
}
