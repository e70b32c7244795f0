//! Inventory domain module (in-memory indexed store).
//!
//! This crate contains the record store, its name index, display ordering,
//! the low-stock projection and the removal undo log. It performs no I/O:
//! prompting, parsing and terminal output belong to the caller.

pub mod low_stock;
pub mod name_index;
pub mod record;
pub mod sort;
pub mod store;
pub mod tracker;
pub mod undo;

pub use name_index::{NameIndex, NormalizedName};
pub use record::Record;
pub use sort::merge_sort_by_key;
pub use store::InventoryStore;
pub use tracker::{Tracker, TrackerCommand, TrackerOutcome};
pub use undo::{UndoEntry, UndoLog};
