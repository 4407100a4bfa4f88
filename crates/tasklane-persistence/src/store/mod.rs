pub mod atomic_writer;
pub mod slot_store;

pub use atomic_writer::AtomicWriter;
pub use slot_store::{SlotStore, DEFAULT_SLOT};
