//! The authoritative in-memory record collection.

use stockroom_core::{DomainError, DomainResult, ItemId, position_by_id};

use crate::name_index::{NameIndex, NormalizedName};
use crate::record::Record;

/// Ordered collection of records plus the name index that mirrors it.
///
/// Invariants (upheld by every public mutation):
/// - no two records share an id
/// - no two records share a normalized name
/// - `index[normalize(r.name)] == r.id` for every stored record, and the index
///   holds nothing else
///
/// Iteration order is insertion order until [`sort_by_name`](Self::sort_by_name)
/// reorders the records in place.
///
/// Name lookups go name → id (index) → position (linear scan by id). The scan
/// is fine at interactive sizes; a larger store would want an id-keyed index
/// under the same mirroring rule.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    records: Vec<Record>,
    index: NameIndex,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed records, applying the same checks as [`insert`](Self::insert).
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> DomainResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.insert_record(record)?;
        }
        Ok(store)
    }

    /// Insert a new record at the end of the sequence.
    ///
    /// Rejects a duplicate id first, then a duplicate normalized name. Nothing
    /// is mutated on rejection.
    pub fn insert(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
        quantity: i64,
        location: impl Into<String>,
    ) -> DomainResult<&Record> {
        self.insert_record(Record::new(id, name, quantity, location))?;
        Ok(&self.records[self.records.len() - 1])
    }

    /// Insert an already-built record (seed data, undo restoration).
    pub fn insert_record(&mut self, record: Record) -> DomainResult<()> {
        if self.contains_id(record.id()) {
            return Err(DomainError::DuplicateId(record.id()));
        }
        let key = record.normalized_name();
        if self.index.contains(&key) {
            return Err(DomainError::duplicate_name(record.name()));
        }

        self.index.insert(key, record.id());
        self.records.push(record);
        Ok(())
    }

    /// Remove the record with this name (case-insensitive) and hand it back.
    ///
    /// Remaining records keep their relative order.
    pub fn remove_by_name(&mut self, name: &str) -> DomainResult<Record> {
        let key = NormalizedName::new(name);
        let pos = self
            .position_of(&key)
            .ok_or_else(|| DomainError::not_found(name))?;

        let record = self.records.remove(pos);
        self.index.remove(&key);
        Ok(record)
    }

    /// Set the quantity of the named record, returning the previous quantity.
    pub fn update_quantity(&mut self, name: &str, new_quantity: i64) -> DomainResult<i64> {
        let key = NormalizedName::new(name);
        let pos = self
            .position_of(&key)
            .ok_or_else(|| DomainError::not_found(name))?;
        Ok(self.records[pos].set_quantity(new_quantity))
    }

    pub fn find_by_name(&self, name: &str) -> DomainResult<&Record> {
        let key = NormalizedName::new(name);
        self.position_of(&key)
            .map(|pos| &self.records[pos])
            .ok_or_else(|| DomainError::not_found(name))
    }

    /// Position of the record with this id in the current sequence.
    pub fn find_index_by_id(&self, id: ItemId) -> Option<usize> {
        position_by_id(&self.records, id)
    }

    pub fn contains_id(&self, id: ItemId) -> bool {
        self.find_index_by_id(id).is_some()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.index.contains(&NormalizedName::new(name))
    }

    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn name_index(&self) -> &NameIndex {
        &self.index
    }

    /// Recompute the name index from the record sequence.
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        for record in &self.records {
            self.index.insert(record.normalized_name(), record.id());
        }
    }

    /// Records as a mutable slice: callers may reorder but never add or drop.
    pub(crate) fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    fn position_of(&self, key: &NormalizedName) -> Option<usize> {
        let id = self.index.get(key)?;
        self.find_index_by_id(id)
    }
}
