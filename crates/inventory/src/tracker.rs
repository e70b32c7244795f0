//! Command facade over the store and its undo log.
//!
//! The interface layer builds a [`TrackerCommand`] from user input and hands it
//! to [`Tracker::execute`]; exactly one store (or undo log) operation runs and
//! its result comes back as a [`TrackerOutcome`]. Removals go through here so
//! that every successful removal lands on the undo log.

use tracing::{debug, info, warn};

use stockroom_core::{DomainResult, ItemId};

use crate::record::Record;
use crate::store::InventoryStore;
use crate::undo::UndoLog;

/// A single request against the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerCommand {
    Insert {
        id: ItemId,
        name: String,
        quantity: i64,
        location: String,
    },
    Remove {
        name: String,
    },
    UpdateQuantity {
        name: String,
        quantity: i64,
    },
    Find {
        name: String,
    },
    SortByName,
    UndoLast,
}

impl TrackerCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            TrackerCommand::Insert { .. } => "insert",
            TrackerCommand::Remove { .. } => "remove",
            TrackerCommand::UpdateQuantity { .. } => "update_quantity",
            TrackerCommand::Find { .. } => "find",
            TrackerCommand::SortByName => "sort_by_name",
            TrackerCommand::UndoLast => "undo_last",
        }
    }
}

/// Successful result of a [`TrackerCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerOutcome {
    Inserted(Record),
    Removed(Record),
    QuantityUpdated { record: Record, previous: i64 },
    Found(Record),
    Sorted { count: usize },
    Restored(Record),
}

/// Inventory store plus the undo log for its removals.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    store: InventoryStore,
    undo: UndoLog,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: InventoryStore) -> Self {
        Self {
            store,
            undo: UndoLog::new(),
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn undo_log(&self) -> &UndoLog {
        &self.undo
    }

    pub fn execute(&mut self, command: TrackerCommand) -> DomainResult<TrackerOutcome> {
        let kind = command.kind();
        let result = self.dispatch(command);
        match &result {
            // UndoLog already reported the discarded entry.
            Err(error) if error.is_undo_conflict() => {
                debug!(command = kind, error = %error, "undo blocked");
            }
            Err(error) => warn!(command = kind, error = %error, "command rejected"),
            Ok(_) => {}
        }
        result
    }

    fn dispatch(&mut self, command: TrackerCommand) -> DomainResult<TrackerOutcome> {
        match command {
            TrackerCommand::Insert {
                id,
                name,
                quantity,
                location,
            } => {
                let record = self.store.insert(id, name, quantity, location)?.clone();
                info!(id = %record.id(), name = %record.name(), quantity, "item inserted");
                Ok(TrackerOutcome::Inserted(record))
            }
            TrackerCommand::Remove { name } => {
                let record = self.store.remove_by_name(&name)?;
                info!(id = %record.id(), name = %record.name(), "item removed");
                self.undo.record_removal(record.clone());
                Ok(TrackerOutcome::Removed(record))
            }
            TrackerCommand::UpdateQuantity { name, quantity } => {
                let previous = self.store.update_quantity(&name, quantity)?;
                let record = self.store.find_by_name(&name)?.clone();
                info!(id = %record.id(), previous, quantity, "quantity updated");
                Ok(TrackerOutcome::QuantityUpdated { record, previous })
            }
            TrackerCommand::Find { name } => {
                let record = self.store.find_by_name(&name)?.clone();
                debug!(id = %record.id(), query = %name, "item found");
                Ok(TrackerOutcome::Found(record))
            }
            TrackerCommand::SortByName => {
                self.store.sort_by_name();
                let count = self.store.len();
                debug!(count, "store sorted by name");
                Ok(TrackerOutcome::Sorted { count })
            }
            TrackerCommand::UndoLast => {
                let record = self.undo.undo_last(&mut self.store)?;
                info!(id = %record.id(), name = %record.name(), "removal undone");
                Ok(TrackerOutcome::Restored(record))
            }
        }
    }

    pub fn low_stock_view(&self) -> Vec<&Record> {
        self.store.low_stock_view()
    }

    pub fn low_stock_at_most(&self, threshold: i64) -> Vec<&Record> {
        self.store.low_stock_at_most(threshold)
    }
}
