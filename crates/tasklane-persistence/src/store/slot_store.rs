use std::path::{Path, PathBuf};

use tasklane_core::{AppConfig, BoardError, BoardResult};
use tasklane_domain::BoardState;

use crate::store::atomic_writer::AtomicWriter;
use crate::traits::SnapshotStore;

/// Name of the single storage slot holding the board snapshot.
pub const DEFAULT_SLOT: &str = "kanban-board-data";

/// JSON file-backed implementation of the single-slot snapshot store.
///
/// The whole board is written on every save; there is no partial
/// persistence and no schema versioning. A snapshot that fails to parse
/// or does not match the documented shape is treated as absent.
#[derive(Debug, Clone)]
pub struct SlotStore {
    path: PathBuf,
}

impl SlotStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Place the default slot in the configured data directory.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config
                .effective_data_dir()
                .join(format!("{DEFAULT_SLOT}.json")),
        )
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> BoardResult<BoardState> {
        let bytes = AtomicWriter::read_all(&self.path)?;
        serde_json::from_slice(&bytes).map_err(|e| BoardError::Serialization(e.to_string()))
    }

    fn try_save(&self, state: &BoardState) -> BoardResult<()> {
        let bytes =
            serde_json::to_vec_pretty(state).map_err(|e| BoardError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&self.path, &bytes)?;
        tracing::debug!("Saved {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }
}

impl SnapshotStore for SlotStore {
    fn load(&self) -> BoardState {
        if !self.path.exists() {
            tracing::debug!(
                "No snapshot at {}; seeding default board",
                self.path.display()
            );
            return BoardState::default();
        }
        match self.try_load() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(
                    "Failed to load board state from {}: {e}; falling back to defaults",
                    self.path.display()
                );
                BoardState::default()
            }
        }
    }

    fn save(&self, state: &BoardState) {
        if let Err(e) = self.try_save(state) {
            tracing::warn!("Failed to save board state to {}: {e}", self.path.display());
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!("Failed to clear board slot {}: {e}", self.path.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklane_domain::{Column, Task};
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> SlotStore {
        SlotStore::new(dir.path().join(format!("{DEFAULT_SLOT}.json")))
    }

    #[test]
    fn test_missing_slot_seeds_default_board() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let state = store.load();
        let ids: Vec<&str> = state.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["todo", "in-progress", "done"]);
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn test_save_load_round_trip_is_lossless() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let mut state = BoardState::default();
        state.columns.push(Column::new("Review", 3, "#ec4899"));
        let mut task = Task::new("todo", "Write tests", 0);
        task.set_completed(true);
        state.tasks.push(task);
        state.tasks.push(Task::new("done", "Ship it", 0));

        store.save(&state);
        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_snapshot_uses_camel_case_schema() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let mut state = BoardState::default();
        state.tasks.push(Task::new("todo", "A", 0));
        store.save(&state);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let task = &value["tasks"][0];
        assert!(task.get("columnId").is_some());
        assert!(task.get("createdAt").is_some());
        assert!(task.get("column_id").is_none());
    }

    #[test]
    fn test_corrupt_json_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").unwrap();

        let state = store.load();
        assert_eq!(state, BoardState::default());
    }

    #[test]
    fn test_structural_mismatch_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        // Valid JSON, wrong shape.
        std::fs::write(store.path(), r#"{"columns": 7, "tasks": "nope"}"#).unwrap();

        let state = store.load();
        assert_eq!(state, BoardState::default());
    }

    #[test]
    fn test_clear_removes_slot_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&BoardState::default());
        assert!(store.exists());

        store.clear();
        assert!(!store.exists());
        store.clear();
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        // Point the slot at a path whose parent is a file, so the write
        // cannot succeed.
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();
        let store = SlotStore::new(blocker.join("slot.json"));

        store.save(&BoardState::default());
        assert_eq!(store.load(), BoardState::default());
    }
}
