use super::{Command, CommandContext};
use crate::column::{is_base_column, ColumnId};
use tasklane_core::{BoardError, BoardResult};

/// Create a new column after the current last one.
pub struct AddColumn {
    pub title: String,
}

impl Command for AddColumn {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        context.columns.add(&self.title);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add column: '{}'", self.title)
    }
}

/// Rename a column.
pub struct EditColumn {
    pub column_id: ColumnId,
    pub title: String,
}

impl Command for EditColumn {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        context.columns.edit(&self.column_id, &self.title);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Edit column {}", self.column_id)
    }
}

/// Delete a column and cascade-delete its tasks.
///
/// Base columns are protected by id and refuse deletion. The
/// presentation layer confirms with the user before issuing this.
pub struct DeleteColumn {
    pub column_id: ColumnId,
}

impl Command for DeleteColumn {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        if is_base_column(&self.column_id) {
            return Err(BoardError::Validation(format!(
                "Column '{}' is a base column and cannot be deleted",
                self.column_id
            )));
        }
        context.columns.delete(&self.column_id);
        let remaining: Vec<_> = context
            .tasks
            .tasks()
            .iter()
            .filter(|t| t.column_id != self.column_id)
            .cloned()
            .collect();
        context.tasks.replace(remaining);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete column {}", self.column_id)
    }
}

/// Move a column to a new list position, renumbering all columns.
pub struct ReorderColumns {
    pub source_index: usize,
    pub dest_index: usize,
}

impl Command for ReorderColumns {
    fn execute(&self, context: &mut CommandContext) -> BoardResult<()> {
        context.columns.reorder(self.source_index, self.dest_index);
        Ok(())
    }

    fn description(&self) -> String {
        format!(
            "Reorder columns: {} -> {}",
            self.source_index, self.dest_index
        )
    }
}
