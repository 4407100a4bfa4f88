use tasklane_core::BoardResult;

pub mod bulk_commands;
pub mod column_commands;
pub mod task_commands;

pub use bulk_commands::*;
pub use column_commands::*;
pub use task_commands::*;

use crate::{ColumnStore, Selection, TaskStore};

/// Trait for board commands that mutate state.
/// Commands represent user intent; the orchestration layer executes them
/// against the live stores and persists the snapshot afterwards.
pub trait Command: Send + Sync {
    /// Execute this command, mutating the board state.
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()>;

    /// Human-readable description of what this command does.
    fn description(&self) -> String;
}

/// Context passed to commands for mutation.
/// Holds the stores plus the transient selection.
pub struct CommandContext<'a> {
    pub columns: &'a mut ColumnStore,
    pub tasks: &'a mut TaskStore,
    pub selection: &'a mut Selection,
}
