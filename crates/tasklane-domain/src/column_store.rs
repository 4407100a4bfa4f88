use crate::column::{Column, ColorPicker, RandomColorPicker};

/// Authoritative in-memory collection of columns.
///
/// Deletion is unconditional here; base-column protection is enforced by
/// the caller before invoking `delete`, as is the cascade that removes
/// the column's tasks.
pub struct ColumnStore {
    columns: Vec<Column>,
    picker: Box<dyn ColorPicker>,
}

impl ColumnStore {
    pub fn new(columns: Vec<Column>) -> Self {
        Self::with_picker(columns, Box::new(RandomColorPicker))
    }

    /// Inject a color picker; tests use a deterministic one.
    pub fn with_picker(columns: Vec<Column>, picker: Box<dyn ColorPicker>) -> Self {
        Self { columns, picker }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Columns sorted by their order field.
    pub fn in_order(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|c| c.order);
        columns
    }

    /// Append a new column with a palette color. No-op if the title
    /// trims empty.
    pub fn add(&mut self, title: &str) {
        if title.trim().is_empty() {
            return;
        }
        let order = self
            .columns
            .iter()
            .map(|c| c.order)
            .max()
            .map_or(0, |max| max + 1);
        let color = self.picker.pick();
        self.columns.push(Column::new(title, order, color));
    }

    /// Remove a column unconditionally. Unknown ids are ignored.
    pub fn delete(&mut self, column_id: &str) {
        self.columns.retain(|c| c.id != column_id);
    }

    /// Rename a column. No-op if the id is unknown or the title trims
    /// empty.
    pub fn edit(&mut self, column_id: &str, new_title: &str) {
        if new_title.trim().is_empty() {
            return;
        }
        if let Some(column) = self.columns.iter_mut().find(|c| c.id == column_id) {
            column.rename(new_title);
        }
    }

    /// Move a column from one list position to another, then renumber
    /// every column's order to its list index (contiguous 0..N-1).
    pub fn reorder(&mut self, source_index: usize, dest_index: usize) {
        if source_index >= self.columns.len() {
            return;
        }
        let column = self.columns.remove(source_index);
        let dest_index = dest_index.min(self.columns.len());
        self.columns.insert(dest_index, column);
        for (index, column) in self.columns.iter_mut().enumerate() {
            column.order = index as i64;
        }
    }

    /// Unconditionally replace the full column list.
    pub fn replace(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }
}

impl Default for ColumnStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
