pub mod board;
pub mod column;
pub mod column_store;
pub mod commands;
pub mod filter;
pub mod reorder;
pub mod search;
pub mod selection;
pub mod task;
pub mod task_store;

pub use board::BoardState;
pub use column::{
    base_columns, find_by_title, is_base_column, Column, ColumnId, ColorPicker, RandomColorPicker,
    BASE_COLUMN_IDS, COLUMN_PALETTE,
};
pub use column_store::ColumnStore;
pub use filter::TaskFilter;
pub use search::HighlightSpan;
pub use selection::Selection;
pub use task::{Task, TaskId};
pub use task_store::TaskStore;
