use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId};

use crate::name_index::NormalizedName;

/// A stock item held by an [`InventoryStore`](crate::InventoryStore).
///
/// Fields are read-only from the outside: the store is the single owner of
/// records and the only place that mutates them (quantity updates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: ItemId,
    name: String,
    quantity: i64,
    location: String,
}

impl Record {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: i64,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            location: location.into(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Name as entered by the caller (case preserved).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Case-folded name used for index keys and ordering.
    pub fn normalized_name(&self) -> NormalizedName {
        NormalizedName::new(&self.name)
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) -> i64 {
        core::mem::replace(&mut self.quantity, quantity)
    }
}

impl Entity for Record {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
