use std::collections::HashSet;

use crate::task::TaskId;

/// Multi-select set of task ids.
///
/// Process-lifetime only; never persisted. Bulk operations and drag
/// moves clear it when they complete.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: HashSet<TaskId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.selected.contains(task_id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Toggle one task.
    ///
    /// Multi-select flips membership without touching other members.
    /// Single-select replaces the whole set with this task, except that
    /// clicking the sole selected task again deselects it.
    pub fn toggle(&mut self, task_id: &str, is_multi_select: bool) {
        if is_multi_select {
            if !self.selected.remove(task_id) {
                self.selected.insert(task_id.to_string());
            }
        } else if self.selected.contains(task_id) && self.selected.len() == 1 {
            self.selected.clear();
        } else {
            self.selected.clear();
            self.selected.insert(task_id.to_string());
        }
    }

    /// Additive toggle over a set of ids: if every given id is already
    /// selected, deselect them all; otherwise select them all. Ids not
    /// in the given set are left alone.
    pub fn select_all(&mut self, task_ids: &[TaskId]) {
        let all_selected = task_ids.iter().all(|id| self.selected.contains(id));
        if all_selected {
            for id in task_ids {
                self.selected.remove(id);
            }
        } else {
            for id in task_ids {
                self.selected.insert(id.clone());
            }
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Remove one id; no-op if absent.
    pub fn remove(&mut self, task_id: &str) {
        self.selected.remove(task_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<TaskId> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_select_replaces() {
        let mut selection = Selection::new();
        selection.toggle("a", false);
        selection.toggle("b", false);

        assert_eq!(selection.len(), 1);
        assert!(selection.contains("b"));
    }

    #[test]
    fn test_single_select_twice_deselects() {
        let mut selection = Selection::new();
        selection.toggle("a", false);
        selection.toggle("a", false);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_single_select_shrinks_multi_selection() {
        let mut selection = Selection::new();
        selection.toggle("a", true);
        selection.toggle("b", true);

        // "a" is selected but not the sole selection, so this replaces.
        selection.toggle("a", false);
        assert_eq!(selection.len(), 1);
        assert!(selection.contains("a"));
    }

    #[test]
    fn test_multi_select_flips_membership() {
        let mut selection = Selection::new();
        selection.toggle("a", true);
        selection.toggle("b", true);
        assert_eq!(selection.len(), 2);

        selection.toggle("a", true);
        assert!(!selection.contains("a"));
        assert!(selection.contains("b"));
    }

    #[test]
    fn test_select_all_twice_is_a_pure_toggle() {
        let mut selection = Selection::new();
        let all = ids(&["a", "b", "c"]);

        selection.select_all(&all);
        assert_eq!(selection.len(), 3);

        selection.select_all(&all);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_is_independent_of_other_ids() {
        let mut selection = Selection::new();
        selection.toggle("x", true);

        selection.select_all(&ids(&["a", "b"]));
        assert_eq!(selection.len(), 3);

        // All of a,b selected: toggling deselects only them.
        selection.select_all(&ids(&["a", "b"]));
        assert_eq!(selection.len(), 1);
        assert!(selection.contains("x"));
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut selection = Selection::new();
        selection.toggle("a", true);
        selection.remove("b");
        assert_eq!(selection.len(), 1);
        selection.remove("a");
        assert!(selection.is_empty());
    }
}
