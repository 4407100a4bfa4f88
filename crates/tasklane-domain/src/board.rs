use serde::{Deserialize, Serialize};

use crate::column::{base_columns, Column};
use crate::task::Task;

/// The entire persisted unit: every save writes the full snapshot, every
/// load reads it back whole. Selection state is transient and never part
/// of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
}

impl BoardState {
    pub fn new(columns: Vec<Column>, tasks: Vec<Task>) -> Self {
        Self { columns, tasks }
    }

    pub fn total_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            columns: base_columns(),
            tasks: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_has_base_columns_and_no_tasks() {
        let state = BoardState::default();
        assert_eq!(state.columns.len(), 3);
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn test_task_counts() {
        let mut state = BoardState::default();
        state.tasks.push(Task::new("todo", "A", 0));
        let mut done = Task::new("done", "B", 0);
        done.set_completed(true);
        state.tasks.push(done);

        assert_eq!(state.total_tasks(), 2);
        assert_eq!(state.completed_tasks(), 1);
    }
}
