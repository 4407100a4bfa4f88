use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::column::ColumnId;

pub type TaskId = String;

/// A single task on the board.
///
/// `order` establishes the display sequence within a column; the
/// reordering engine keeps it pairwise distinct per column after every
/// mutating operation. Field names are serialized camelCase to match the
/// persisted snapshot schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub column_id: ColumnId,
    pub order: i64,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
}

impl Task {
    pub fn new(column_id: impl Into<ColumnId>, title: impl Into<String>, order: i64) -> Self {
        Self {
            id: format!("task-{}", Uuid::new_v4()),
            title: title.into(),
            completed: false,
            column_id: column_id.into(),
            order,
            created_at: Utc::now().timestamp_millis(),
        }
    }

    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn move_to(&mut self, column_id: impl Into<ColumnId>, order: i64) {
        self.column_id = column_id.into();
        self.order = order;
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("todo", "Write report", 3);
        assert!(task.id.starts_with("task-"));
        assert_eq!(task.title, "Write report");
        assert!(!task.completed);
        assert_eq!(task.column_id, "todo");
        assert_eq!(task.order, 3);
        assert!(task.created_at > 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Task::new("todo", "A", 0);
        let b = Task::new("todo", "B", 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_move_to() {
        let mut task = Task::new("todo", "A", 0);
        task.move_to("done", 5);
        assert_eq!(task.column_id, "done");
        assert_eq!(task.order, 5);
    }
}
