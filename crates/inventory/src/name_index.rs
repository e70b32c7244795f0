//! Secondary index from normalized item name to item id.

use std::collections::HashMap;

use stockroom_core::ItemId;

/// Case-folded item name.
///
/// Two names that differ only in case normalize to the same value; ordering is
/// the byte order of the folded text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized name → id map.
///
/// Holds derived identifiers only, never records. The owning store keeps it in
/// lockstep with every insert and removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    entries: HashMap<NormalizedName, ItemId>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &NormalizedName) -> Option<ItemId> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &NormalizedName) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, name: NormalizedName, id: ItemId) -> Option<ItemId> {
        self.entries.insert(name, id)
    }

    pub(crate) fn remove(&mut self, name: &NormalizedName) -> Option<ItemId> {
        self.entries.remove(name)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
