use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ColumnId = String;

/// Ids of the three protected base columns. They can be renamed but
/// never deleted; delete protection matches on these fixed ids.
pub const BASE_COLUMN_IDS: [&str; 3] = ["todo", "in-progress", "done"];

/// Fixed palette for user-created columns.
pub const COLUMN_PALETTE: [&str; 6] = [
    "#3b82f6", "#f59e0b", "#10b981", "#ef4444", "#8b5cf6", "#ec4899",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub order: i64,
    /// Display hint, `#rrggbb`.
    pub color: String,
}

impl Column {
    pub fn new(title: impl Into<String>, order: i64, color: impl Into<String>) -> Self {
        Self {
            id: format!("column-{}", Uuid::new_v4()),
            title: title.into(),
            order,
            color: color.into(),
        }
    }

    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

/// Check whether a column is one of the protected base columns.
pub fn is_base_column(column_id: &str) -> bool {
    BASE_COLUMN_IDS.contains(&column_id)
}

/// The default board columns, seeded on first run.
pub fn base_columns() -> Vec<Column> {
    vec![
        Column {
            id: "todo".to_string(),
            title: "To Do".to_string(),
            order: 0,
            color: "#3b82f6".to_string(),
        },
        Column {
            id: "in-progress".to_string(),
            title: "In Progress".to_string(),
            order: 1,
            color: "#f59e0b".to_string(),
        },
        Column {
            id: "done".to_string(),
            title: "Done".to_string(),
            order: 2,
            color: "#10b981".to_string(),
        },
    ]
}

/// Resolve a column by case-insensitive title.
///
/// Completion-driven reassignment (toggle, drop into Done, bulk status
/// change) resolves its target this way, so renaming a base column opts
/// it out of that behavior. Delete protection matches on id instead.
pub fn find_by_title<'a>(columns: &'a [Column], title: &str) -> Option<&'a Column> {
    columns.iter().find(|c| c.title.eq_ignore_ascii_case(title))
}

/// Source of display colors for new columns.
pub trait ColorPicker: Send {
    fn pick(&mut self) -> String;
}

/// Uniform random selection from the fixed palette.
#[derive(Debug, Default)]
pub struct RandomColorPicker;

impl ColorPicker for RandomColorPicker {
    fn pick(&mut self) -> String {
        COLUMN_PALETTE
            .choose(&mut rand::thread_rng())
            .unwrap_or(&COLUMN_PALETTE[0])
            .to_string()
    }
}
