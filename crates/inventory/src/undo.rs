//! Compensation log for removals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use stockroom_core::{DomainError, DomainResult};

use crate::record::Record;
use crate::store::InventoryStore;

/// A removed record, kept verbatim (original id included) so the removal can be reversed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoEntry {
    pub record: Record,
    pub removed_at: DateTime<Utc>,
}

/// LIFO log of compensating entries, one per successful removal.
///
/// Undo is single-level: each call consumes at most the newest entry. An entry
/// that cannot be restored because its id or name is taken again is still
/// consumed ("burned"); a later undo moves on to the next-older entry instead
/// of retrying it.
#[derive(Debug, Clone, Default)]
pub struct UndoLog {
    entries: Vec<UndoEntry>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_removal(&mut self, record: Record) {
        self.record_removal_at(record, Utc::now());
    }

    pub fn record_removal_at(&mut self, record: Record, removed_at: DateTime<Utc>) {
        self.entries.push(UndoEntry { record, removed_at });
    }

    /// Restore the most recently removed record into `store`.
    ///
    /// Returns the restored record, or:
    /// - `NothingToUndo` when the log is empty
    /// - `ConflictId` / `ConflictName` when the record collides with a current
    ///   one; the entry is discarded and the store is unchanged
    pub fn undo_last(&mut self, store: &mut InventoryStore) -> DomainResult<Record> {
        let entry = self.entries.pop().ok_or(DomainError::NothingToUndo)?;

        match store.insert_record(entry.record.clone()) {
            Ok(()) => Ok(entry.record),
            Err(err) => {
                let conflict = match err {
                    DomainError::DuplicateId(id) => DomainError::ConflictId(id),
                    DomainError::DuplicateName(name) => DomainError::conflict_name(name),
                    other => other,
                };
                warn!(
                    id = %entry.record.id(),
                    name = %entry.record.name(),
                    error = %conflict,
                    "undo entry discarded"
                );
                Err(conflict)
            }
        }
    }

    /// Newest entry, i.e. the one the next undo would consume.
    pub fn peek(&self) -> Option<&UndoEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::assert_index_mirrors;
    use proptest::prelude::*;
    use stockroom_core::ItemId;

    fn widget_and_gadget() -> InventoryStore {
        InventoryStore::from_records([
            Record::new(ItemId::new(1), "Widget", 10, "A1"),
            Record::new(ItemId::new(2), "Gadget", 3, "B2"),
        ])
        .unwrap()
    }

    fn remove(store: &mut InventoryStore, log: &mut UndoLog, name: &str) {
        let removed = store.remove_by_name(name).unwrap();
        log.record_removal(removed);
    }

    #[test]
    fn empty_log_has_nothing_to_undo() {
        let mut store = widget_and_gadget();
        let mut log = UndoLog::new();
        assert_eq!(log.undo_last(&mut store).unwrap_err(), DomainError::NothingToUndo);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn undo_restores_original_identity() {
        let mut store = widget_and_gadget();
        let mut log = UndoLog::new();
        remove(&mut store, &mut log, "widget");
        assert_eq!(log.len(), 1);
        assert_eq!(log.peek().unwrap().record.name(), "Widget");

        let restored = log.undo_last(&mut store).unwrap();
        assert_eq!(restored, Record::new(ItemId::new(1), "Widget", 10, "A1"));
        assert!(log.is_empty());
        assert_eq!(store.find_by_name("WIDGET").unwrap().id(), ItemId::new(1));
        assert_index_mirrors(&store);
    }

    #[test]
    fn undo_is_lifo() {
        let mut store = widget_and_gadget();
        let mut log = UndoLog::new();
        remove(&mut store, &mut log, "Widget");
        remove(&mut store, &mut log, "Gadget");

        assert_eq!(log.undo_last(&mut store).unwrap().name(), "Gadget");
        assert_eq!(log.undo_last(&mut store).unwrap().name(), "Widget");
        assert_eq!(log.undo_last(&mut store).unwrap_err(), DomainError::NothingToUndo);
    }

    #[test]
    fn id_conflict_burns_the_entry() {
        let mut store = widget_and_gadget();
        let mut log = UndoLog::new();
        remove(&mut store, &mut log, "Widget");
        store.insert(ItemId::new(1), "Replacement", 0, "Z9").unwrap();
        let snapshot = store.all().to_vec();

        assert_eq!(
            log.undo_last(&mut store).unwrap_err(),
            DomainError::ConflictId(ItemId::new(1))
        );
        assert_eq!(store.all(), snapshot.as_slice());

        // The blocked entry was consumed, not queued for a retry.
        assert_eq!(log.undo_last(&mut store).unwrap_err(), DomainError::NothingToUndo);
    }

    #[test]
    fn name_conflict_burns_the_entry() {
        let mut store = widget_and_gadget();
        let mut log = UndoLog::new();
        remove(&mut store, &mut log, "Widget");
        store.insert(ItemId::new(7), "WIDGET", 0, "Z9").unwrap();

        assert_eq!(
            log.undo_last(&mut store).unwrap_err(),
            DomainError::ConflictName("Widget".to_string())
        );
        assert_eq!(store.len(), 2);
        assert!(log.is_empty());
        assert_index_mirrors(&store);
    }

    #[test]
    fn burned_entry_exposes_the_older_one() {
        let mut store = widget_and_gadget();
        let mut log = UndoLog::new();
        remove(&mut store, &mut log, "Gadget");
        remove(&mut store, &mut log, "Widget");
        store.insert(ItemId::new(1), "Other", 0, "Z9").unwrap();

        assert!(log.undo_last(&mut store).unwrap_err().is_undo_conflict());
        assert_eq!(log.undo_last(&mut store).unwrap().name(), "Gadget");
    }

    #[test]
    fn entries_keep_the_removal_time() {
        let mut log = UndoLog::new();
        let at = DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        log.record_removal_at(Record::new(ItemId::new(1), "Widget", 10, "A1"), at);
        assert_eq!(log.peek().unwrap().removed_at, at);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: removing any record and immediately undoing yields the
        /// same multiset of records.
        #[test]
        fn remove_then_undo_round_trips(
            quantities in prop::collection::vec(-5i64..100, 1..30),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut store = InventoryStore::from_records(
                quantities
                    .iter()
                    .enumerate()
                    .map(|(i, q)| Record::new(ItemId::new(i as i64), format!("Item{i}"), *q, "L")),
            )
            .unwrap();
            let mut before = store.all().to_vec();

            let target = before[pick.index(before.len())].name().to_string();
            let mut log = UndoLog::new();
            remove(&mut store, &mut log, &target);
            log.undo_last(&mut store).unwrap();

            let mut after = store.all().to_vec();
            before.sort_by_key(|r| r.id());
            after.sort_by_key(|r| r.id());
            prop_assert_eq!(before, after);
            assert_index_mirrors(&store);
        }
    }
}
