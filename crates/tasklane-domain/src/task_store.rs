use crate::task::{Task, TaskId};

/// Authoritative in-memory collection of tasks.
///
/// Validation failures (blank titles, unknown ids) are silent no-ops;
/// there is no user-visible error for them. `replace` is the escape
/// hatch the reordering engine uses to commit a fully recomputed list.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Add a task at the end of a column. No-op if the title trims empty.
    pub fn add(&mut self, column_id: &str, title: &str) {
        if title.trim().is_empty() {
            return;
        }
        let order = self.next_order_in(column_id);
        self.tasks.push(Task::new(column_id, title, order));
    }

    /// Rename a task. No-op if the id is unknown, the new title trims
    /// empty, or it equals the current title.
    pub fn edit(&mut self, task_id: &str, new_title: &str) {
        if new_title.trim().is_empty() {
            return;
        }
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) {
            if task.title != new_title {
                task.rename(new_title);
            }
        }
    }

    /// Remove a task. Idempotent; unknown ids are ignored.
    pub fn delete(&mut self, task_id: &str) {
        self.tasks.retain(|t| t.id != task_id);
    }

    /// Flip a task's completion flag in place. Column-aware toggling
    /// (reassignment to Done / To Do) lives in the reordering engine.
    pub fn toggle_completed(&mut self, task_id: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) {
            task.completed = !task.completed;
        }
    }

    /// Unconditionally replace the full task list.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Tasks of one column, sorted by order.
    pub fn in_column(&self, column_id: &str) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.column_id == column_id)
            .collect();
        tasks.sort_by_key(|t| t.order);
        tasks
    }

    /// Ids of one column's tasks, in display order.
    pub fn ids_in_column(&self, column_id: &str) -> Vec<TaskId> {
        self.in_column(column_id)
            .into_iter()
            .map(|t| t.id.clone())
            .collect()
    }

    /// The order value for a task appended to this column.
    fn next_order_in(&self, column_id: &str) -> i64 {
        self.tasks
            .iter()
            .filter(|t| t.column_id == column_id)
            .map(|t| t.order)
            .max()
            .map_or(0, |max| max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_after_column_max() {
        let mut store = TaskStore::default();
        store.add("todo", "First");
        store.add("todo", "Second");
        store.add("done", "Elsewhere");

        let todo = store.in_column("todo");
        assert_eq!(todo.len(), 2);
        assert_eq!(todo[0].order, 0);
        assert_eq!(todo[1].order, 1);
        assert_eq!(store.in_column("done")[0].order, 0);
    }

    #[test]
    fn test_add_whitespace_title_is_noop() {
        let mut store = TaskStore::default();
        store.add("todo", "   ");
        assert!(store.is_empty());
    }

    #[test]
    fn test_edit_replaces_title_only() {
        let mut store = TaskStore::default();
        store.add("todo", "Old");
        let id = store.tasks()[0].id.clone();
        let order = store.tasks()[0].order;

        store.edit(&id, "New");
        assert_eq!(store.get(&id).unwrap().title, "New");
        assert_eq!(store.get(&id).unwrap().order, order);
    }

    #[test]
    fn test_edit_noops() {
        let mut store = TaskStore::default();
        store.add("todo", "Title");
        let id = store.tasks()[0].id.clone();

        store.edit(&id, "  ");
        assert_eq!(store.get(&id).unwrap().title, "Title");

        store.edit("task-missing", "Other");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = TaskStore::default();
        store.add("todo", "A");
        let id = store.tasks()[0].id.clone();

        store.delete(&id);
        assert!(store.is_empty());
        store.delete(&id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_completed_flips() {
        let mut store = TaskStore::default();
        store.add("todo", "A");
        let id = store.tasks()[0].id.clone();

        store.toggle_completed(&id);
        assert!(store.get(&id).unwrap().completed);
        store.toggle_completed(&id);
        assert!(!store.get(&id).unwrap().completed);
    }

    #[test]
    fn test_in_column_sorted_by_order() {
        let mut tasks = vec![
            Task::new("todo", "C", 2),
            Task::new("todo", "A", 0),
            Task::new("todo", "B", 1),
        ];
        tasks.rotate_left(1);
        let store = TaskStore::new(tasks);

        let titles: Vec<&str> = store
            .in_column("todo")
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }
}
