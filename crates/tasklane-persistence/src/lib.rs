pub mod store;
pub mod traits;

pub use store::{AtomicWriter, SlotStore, DEFAULT_SLOT};
pub use traits::SnapshotStore;
