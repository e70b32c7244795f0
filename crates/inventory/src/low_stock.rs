//! Ascending-quantity projection used to spot items running low.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::record::Record;
use crate::store::InventoryStore;

impl InventoryStore {
    /// All records ordered by ascending quantity.
    ///
    /// Recomputed on every call; the store and its order are not touched.
    /// Items with equal quantities come out in no particular order.
    pub fn low_stock_view(&self) -> Vec<&Record> {
        drain_ascending(self.all().iter())
    }

    /// Like [`low_stock_view`](Self::low_stock_view), restricted to quantities
    /// at or below `threshold`.
    pub fn low_stock_at_most(&self, threshold: i64) -> Vec<&Record> {
        drain_ascending(self.all().iter().filter(|r| r.quantity() <= threshold))
    }
}

fn drain_ascending<'a>(records: impl Iterator<Item = &'a Record>) -> Vec<&'a Record> {
    let candidates: Vec<&Record> = records.collect();
    let mut heap: BinaryHeap<Reverse<(i64, usize)>> = candidates
        .iter()
        .enumerate()
        .map(|(slot, r)| Reverse((r.quantity(), slot)))
        .collect();

    let mut out = Vec::with_capacity(heap.len());
    while let Some(Reverse((_, slot))) = heap.pop() {
        out.push(candidates[slot]);
    }
    out
}
