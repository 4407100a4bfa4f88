use super::{Command, CommandContext};
use crate::reorder;
use crate::{ColumnId, TaskId};
use tasklane_core::BoardResult;

/// Drop a task (or the selection containing it) into a column at a
/// given index.
pub struct DropTask {
    pub task_id: TaskId,
    pub target_column_id: ColumnId,
    pub target_index: usize,
}

impl Command for DropTask {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        if let Some(updated) = reorder::drop_on_column(
            context.tasks.tasks(),
            context.columns.columns(),
            context.selection,
            &self.task_id,
            &self.target_column_id,
            self.target_index,
        ) {
            context.tasks.replace(updated);
            if !context.selection.is_empty() {
                context.selection.clear();
            }
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!(
            "Drop task {} into column {} at {}",
            self.task_id, self.target_column_id, self.target_index
        )
    }
}

/// Drop a task (or the selection containing it) onto another task in
/// the same column.
pub struct DropOnTask {
    pub dragged_task_id: TaskId,
    pub target_task_id: TaskId,
}

impl Command for DropOnTask {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        if let Some(updated) = reorder::drop_on_task(
            context.tasks.tasks(),
            context.selection,
            &self.dragged_task_id,
            &self.target_task_id,
        ) {
            context.tasks.replace(updated);
            if !context.selection.is_empty() {
                context.selection.clear();
            }
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!(
            "Drop task {} onto task {}",
            self.dragged_task_id, self.target_task_id
        )
    }
}

/// Mark every selected task complete or incomplete, moving it to the
/// matching Done / To Do column. Clears the selection when it applies.
pub struct MarkSelected {
    pub completed: bool,
}

impl Command for MarkSelected {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        if let Some(updated) = reorder::mark_selected(
            context.tasks.tasks(),
            context.columns.columns(),
            context.selection,
            self.completed,
        ) {
            context.tasks.replace(updated);
            context.selection.clear();
        }
        Ok(())
    }

    fn description(&self) -> String {
        if self.completed {
            "Mark selected tasks complete".to_string()
        } else {
            "Mark selected tasks incomplete".to_string()
        }
    }
}

/// Move every selected task to a column. Clears the selection when it
/// applies.
pub struct MoveSelected {
    pub target_column_id: ColumnId,
}

impl Command for MoveSelected {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        if let Some(updated) = reorder::move_selected(
            context.tasks.tasks(),
            context.selection,
            &self.target_column_id,
        ) {
            context.tasks.replace(updated);
            context.selection.clear();
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Move selected tasks to column {}", self.target_column_id)
    }
}

/// Delete every selected task. The presentation layer confirms with the
/// user before issuing this.
pub struct DeleteSelected;

impl Command for DeleteSelected {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        if context.selection.is_empty() {
            return Ok(());
        }
        let remaining = reorder::delete_selected(context.tasks.tasks(), context.selection);
        context.tasks.replace(remaining);
        context.selection.clear();
        Ok(())
    }

    fn description(&self) -> String {
        "Delete selected tasks".to_string()
    }
}
