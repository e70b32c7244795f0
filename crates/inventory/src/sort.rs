//! Stable display ordering by name.

use crate::store::InventoryStore;

impl InventoryStore {
    /// Reorder records ascending by case-folded name.
    ///
    /// Stable and O(n log n). The name index is keyed by name, not position,
    /// so it stays valid without a rebuild.
    pub fn sort_by_name(&mut self) {
        merge_sort_by_key(self.records_mut(), |r| r.normalized_name());
    }
}

/// Stable top-down merge sort of `items` by an extracted key.
///
/// Keys are computed once per element. Equal keys keep their original
/// relative order.
pub fn merge_sort_by_key<T, K, F>(items: &mut [T], mut key: F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    if items.len() < 2 {
        return;
    }

    let keys: Vec<K> = items.iter().map(&mut key).collect();
    let mut order: Vec<usize> = (0..items.len()).collect();
    let mut scratch = order.clone();
    sort_positions(&mut order, &mut scratch, &keys);

    let sorted: Vec<T> = order.iter().map(|&pos| items[pos].clone()).collect();
    items.clone_from_slice(&sorted);
}

fn sort_positions<K: Ord>(order: &mut [usize], scratch: &mut [usize], keys: &[K]) {
    let len = order.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = order.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        sort_positions(left, left_scratch, keys);
        sort_positions(right, right_scratch, keys);
    }

    scratch.copy_from_slice(order);
    let (left, right) = scratch.split_at(mid);
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        // `<=` takes from the left run on ties, which is what keeps the sort stable.
        if keys[left[i]] <= keys[right[j]] {
            order[k] = left[i];
            i += 1;
        } else {
            order[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    let rest = left.len() - i;
    order[k..k + rest].copy_from_slice(&left[i..]);
    order[k + rest..].copy_from_slice(&right[j..]);
}
