//! Completion filters for per-column task views.

use crate::search;
use crate::task::Task;

/// Toolbar filter over task completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Incomplete => !task.completed,
        }
    }
}

/// One column's tasks after applying the completion filter and search
/// query, sorted by order for display.
pub fn visible_tasks<'a>(
    tasks: &'a [Task],
    column_id: &str,
    filter: TaskFilter,
    query: &str,
) -> Vec<&'a Task> {
    let mut visible: Vec<&Task> = tasks
        .iter()
        .filter(|t| {
            t.column_id == column_id && filter.matches(t) && search::matches(&t.title, query)
        })
        .collect();
    visible.sort_by_key(|t| t.order);
    visible
}
