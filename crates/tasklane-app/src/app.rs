use tasklane_core::BoardResult;
use tasklane_domain::commands::{Command, CommandContext};
use tasklane_domain::{
    filter, is_base_column, BoardState, Column, ColumnStore, Selection, Task, TaskFilter, TaskId,
    TaskStore,
};
use tasklane_persistence::SnapshotStore;

/// The orchestration layer owning the one mutable board.
///
/// A presentation layer issues commands; every successfully executed
/// command commits a new state and fire-and-forgets the full snapshot
/// to the store. Selection, search query, and the completion filter are
/// transient view state and never persisted. Destructive commands
/// (single, bulk, and column deletes) are expected to sit behind a user
/// confirmation in the presentation layer.
pub struct BoardApp {
    columns: ColumnStore,
    tasks: TaskStore,
    selection: Selection,
    store: Box<dyn SnapshotStore>,
    search_query: String,
    filter: TaskFilter,
}

impl BoardApp {
    /// Load the persisted board (or the default one) from the store.
    pub fn new(store: Box<dyn SnapshotStore>) -> Self {
        let state = store.load();
        Self {
            columns: ColumnStore::new(state.columns),
            tasks: TaskStore::new(state.tasks),
            selection: Selection::new(),
            store,
            search_query: String::new(),
            filter: TaskFilter::All,
        }
    }

    /// Execute a command and persist the resulting snapshot.
    ///
    /// A command that fails validation leaves state untouched and skips
    /// the save.
    pub fn execute(&mut self, command: &dyn Command) -> BoardResult<()> {
        let mut context = CommandContext {
            columns: &mut self.columns,
            tasks: &mut self.tasks,
            selection: &mut self.selection,
        };
        command.execute(&mut context)?;
        self.persist();
        Ok(())
    }

    fn persist(&self) {
        self.store.save(&self.snapshot());
    }

    /// The full persistable state.
    pub fn snapshot(&self) -> BoardState {
        BoardState::new(
            self.columns.columns().to_vec(),
            self.tasks.tasks().to_vec(),
        )
    }

    // Selection is transient; changing it does not trigger a save.

    pub fn select_task(&mut self, task_id: &str, is_multi_select: bool) {
        self.selection.toggle(task_id, is_multi_select);
    }

    pub fn select_all(&mut self, task_ids: &[TaskId]) {
        self.selection.select_all(task_ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Columns in display order.
    pub fn columns(&self) -> Vec<&Column> {
        self.columns.in_order()
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    /// One column's tasks under the active filter and search query,
    /// sorted for display.
    pub fn visible_tasks(&self, column_id: &str) -> Vec<&Task> {
        filter::visible_tasks(
            self.tasks.tasks(),
            column_id,
            self.filter,
            &self.search_query,
        )
    }

    /// Ids for a column's visible tasks, the unit select-all operates on.
    pub fn visible_task_ids(&self, column_id: &str) -> Vec<TaskId> {
        self.visible_tasks(column_id)
            .into_iter()
            .map(|t| t.id.clone())
            .collect()
    }

    pub fn total_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_tasks(&self) -> usize {
        self.tasks.tasks().iter().filter(|t| t.completed).count()
    }

    /// Base columns refuse deletion; the presentation layer uses this to
    /// hide or disable the control.
    pub fn can_delete_column(&self, column_id: &str) -> bool {
        !is_base_column(column_id)
    }
}
