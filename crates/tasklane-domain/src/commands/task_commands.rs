use super::{Command, CommandContext};
use crate::reorder;
use crate::{ColumnId, TaskId};
use tasklane_core::BoardResult;

/// Add a task at the end of a column.
pub struct AddTask {
    pub column_id: ColumnId,
    pub title: String,
}

impl Command for AddTask {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        context.tasks.add(&self.column_id, &self.title);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add task: '{}'", self.title)
    }
}

/// Rename a task.
pub struct EditTask {
    pub task_id: TaskId,
    pub title: String,
}

impl Command for EditTask {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        context.tasks.edit(&self.task_id, &self.title);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Edit task {}", self.task_id)
    }
}

/// Delete a single task, dropping it from the selection too.
/// The presentation layer confirms with the user before issuing this.
pub struct DeleteTask {
    pub task_id: TaskId,
}

impl Command for DeleteTask {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        context.tasks.delete(&self.task_id);
        context.selection.remove(&self.task_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete task {}", self.task_id)
    }
}

/// Flip a task's completion and reassign it to the Done / To Do column
/// (resolved by case-insensitive title).
pub struct ToggleComplete {
    pub task_id: TaskId,
}

impl Command for ToggleComplete {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        if let Some(updated) = reorder::toggle_with_reassignment(
            context.tasks.tasks(),
            context.columns.columns(),
            &self.task_id,
        ) {
            context.tasks.replace(updated);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Toggle completion of task {}", self.task_id)
    }
}
