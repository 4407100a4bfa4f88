use tasklane_domain::BoardState;

/// Trait for snapshot storage backends.
///
/// The board engine never observes a storage failure: `load` falls back
/// to the default board, `save` and `clear` swallow and log errors. A
/// board degrades to session-only state when its storage slot is
/// unavailable.
pub trait SnapshotStore: Send + Sync {
    /// Load the persisted snapshot, or the default board when the slot
    /// is missing, corrupt, or structurally invalid.
    fn load(&self) -> BoardState;

    /// Persist the full snapshot, dropping (and logging) any failure.
    fn save(&self, state: &BoardState);

    /// Remove the slot, dropping (and logging) any failure.
    fn clear(&self);
}
