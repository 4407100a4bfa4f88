//! Reordering and reconciliation of task order assignments.
//!
//! Every operation takes the full current task list and returns a full
//! replacement list, so new orders are always computed against one
//! consistent snapshot. `None` means the operation was a validation
//! no-op and the caller must leave state untouched.
//!
//! Two column-resolution strategies coexist on purpose: delete
//! protection matches base columns by fixed id, while completion-driven
//! reassignment resolves Done / To Do by case-insensitive title. A
//! renamed base column therefore keeps its delete protection but stops
//! attracting completed tasks.

use std::collections::HashSet;

use crate::column::{find_by_title, Column};
use crate::selection::Selection;
use crate::task::Task;

/// Resolve the moving set for a drag: the whole selection when the
/// dragged task is part of it, otherwise just the dragged task.
fn moving_set<'a>(tasks: &'a [Task], selection: &Selection, task: &'a Task) -> Vec<&'a Task> {
    if selection.contains(&task.id) {
        tasks.iter().filter(|t| selection.contains(&t.id)).collect()
    } else {
        vec![task]
    }
}

fn max_order_in(tasks: &[Task], column_id: &str) -> i64 {
    tasks
        .iter()
        .filter(|t| t.column_id == column_id)
        .map(|t| t.order)
        .max()
        .unwrap_or(-1)
}

/// Drop a task (or the selection containing it) into a column at
/// `target_index`.
///
/// Moved tasks take orders `target_index, target_index+1, ...` in their
/// pre-existing relative order; non-moving tasks of the target column
/// with order >= `target_index` shift up by the moving-set size.
/// Dropping into a column titled "done" completes the moved tasks;
/// dragging out of it un-completes them. The result is sorted by order
/// globally before commit, matching the behavior downstream consumers
/// see from raw list iteration.
pub fn drop_on_column(
    tasks: &[Task],
    columns: &[Column],
    selection: &Selection,
    task_id: &str,
    target_column_id: &str,
    target_index: usize,
) -> Option<Vec<Task>> {
    let task = tasks.iter().find(|t| t.id == task_id)?;

    let target_column = columns.iter().find(|c| c.id == target_column_id);
    let source_column = columns.iter().find(|c| c.id == task.column_id);
    let moving_to_done = target_column.is_some_and(|c| c.title.eq_ignore_ascii_case("done"));
    let moving_from_done = source_column.is_some_and(|c| c.title.eq_ignore_ascii_case("done"));

    let moving = moving_set(tasks, selection, task);
    let moving_ids: HashSet<&str> = moving.iter().map(|t| t.id.as_str()).collect();
    let shift = moving.len() as i64;
    let target_index = target_index as i64;

    let mut updated: Vec<Task> = tasks
        .iter()
        .map(|t| {
            if moving_ids.contains(t.id.as_str()) {
                let offset = moving.iter().position(|m| m.id == t.id).unwrap_or(0) as i64;
                let mut moved = t.clone();
                moved.column_id = target_column_id.to_string();
                moved.order = target_index + offset;
                if moving_to_done {
                    moved.completed = true;
                } else if moving_from_done {
                    moved.completed = false;
                }
                moved
            } else if t.column_id == target_column_id && t.order >= target_index {
                let mut shifted = t.clone();
                shifted.order += shift;
                shifted
            } else {
                t.clone()
            }
        })
        .collect();

    updated.sort_by_key(|t| t.order);
    Some(updated)
}

/// Drop a task (or the selection containing it) onto another task in the
/// same column, inserting the moving set before the target. A cross-
/// column drop through this path is a no-op.
pub fn drop_on_task(
    tasks: &[Task],
    selection: &Selection,
    dragged_task_id: &str,
    target_task_id: &str,
) -> Option<Vec<Task>> {
    let dragged = tasks.iter().find(|t| t.id == dragged_task_id)?;
    let target = tasks.iter().find(|t| t.id == target_task_id)?;
    if dragged.column_id != target.column_id {
        return None;
    }

    // Selected tasks in other columns stay put on this path.
    let moving: Vec<&Task> = if selection.contains(dragged_task_id) {
        tasks
            .iter()
            .filter(|t| selection.contains(&t.id) && t.column_id == dragged.column_id)
            .collect()
    } else {
        vec![dragged]
    };
    let moving_ids: HashSet<&str> = moving.iter().map(|t| t.id.as_str()).collect();
    let shift = moving.len() as i64;

    let mut column_tasks: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.column_id == dragged.column_id && !moving_ids.contains(t.id.as_str()))
        .collect();
    column_tasks.sort_by_key(|t| t.order);
    let insert_order = column_tasks
        .iter()
        .find(|t| t.id == target_task_id)
        .map_or(0, |t| t.order);

    let mut updated: Vec<Task> = tasks
        .iter()
        .map(|t| {
            if moving_ids.contains(t.id.as_str()) {
                let offset = moving.iter().position(|m| m.id == t.id).unwrap_or(0) as i64;
                let mut moved = t.clone();
                moved.order = insert_order + offset;
                moved
            } else if t.column_id == dragged.column_id && t.order >= insert_order {
                let mut shifted = t.clone();
                shifted.order += shift;
                shifted
            } else {
                t.clone()
            }
        })
        .collect();

    updated.sort_by_key(|t| t.order);
    Some(updated)
}

/// Flip one task's completion and reassign it to the matching column:
/// completing sends it to the column titled "done", un-completing to
/// "to do", each appended after the target column's current maximum
/// order. Without a matching title the task stays in its column but is
/// still moved to the end of it.
pub fn toggle_with_reassignment(
    tasks: &[Task],
    columns: &[Column],
    task_id: &str,
) -> Option<Vec<Task>> {
    let task = tasks.iter().find(|t| t.id == task_id)?;
    let new_completed = !task.completed;

    let target_title = if new_completed { "done" } else { "to do" };
    let new_column_id = find_by_title(columns, target_title)
        .map(|c| c.id.clone())
        .unwrap_or_else(|| task.column_id.clone());

    let max_order = tasks
        .iter()
        .filter(|t| t.column_id == new_column_id && t.id != task_id)
        .map(|t| t.order)
        .max()
        .unwrap_or(-1);

    Some(
        tasks
            .iter()
            .map(|t| {
                if t.id == task_id {
                    let mut toggled = t.clone();
                    toggled.completed = new_completed;
                    toggled.column_id = new_column_id.clone();
                    toggled.order = max_order + 1;
                    toggled
                } else {
                    t.clone()
                }
            })
            .collect(),
    )
}

/// Set completion for every selected task and move it to the matching
/// column ("done" / "to do" by title), appending after the target's
/// current maximum order in task-list iteration order. No-op if the
/// selection is empty or no column carries the target title.
pub fn mark_selected(
    tasks: &[Task],
    columns: &[Column],
    selection: &Selection,
    completed: bool,
) -> Option<Vec<Task>> {
    if selection.is_empty() {
        return None;
    }
    let target_title = if completed { "done" } else { "to do" };
    let target = find_by_title(columns, target_title)?;

    let mut next_order = max_order_in(tasks, &target.id) + 1;
    Some(
        tasks
            .iter()
            .map(|t| {
                if selection.contains(&t.id) {
                    let mut updated = t.clone();
                    updated.completed = completed;
                    updated.column_id = target.id.clone();
                    updated.order = next_order;
                    next_order += 1;
                    updated
                } else {
                    t.clone()
                }
            })
            .collect(),
    )
}

/// Move every selected task to `target_column_id`. Each selected task
/// gets `max(order in target) + 1 + i` where `i` is its position in the
/// full task list, which can leave gaps but never collides. Completion
/// is untouched. No-op on an empty selection.
pub fn move_selected(
    tasks: &[Task],
    selection: &Selection,
    target_column_id: &str,
) -> Option<Vec<Task>> {
    if selection.is_empty() {
        return None;
    }
    let max_order = max_order_in(tasks, target_column_id);

    Some(
        tasks
            .iter()
            .enumerate()
            .map(|(index, t)| {
                if selection.contains(&t.id) {
                    let mut moved = t.clone();
                    moved.column_id = target_column_id.to_string();
                    moved.order = max_order + 1 + index as i64;
                    moved
                } else {
                    t.clone()
                }
            })
            .collect(),
    )
}

/// Remove every selected task. Survivors keep their orders.
pub fn delete_selected(tasks: &[Task], selection: &Selection) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| !selection.contains(&t.id))
        .cloned()
        .collect()
}
