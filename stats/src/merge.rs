use std::collections::HashMap;
use std::hash::Hash;

/// Collapses items sharing a key into one item per key.
///
/// The first item seen for a key seeds the accumulator; every later item with
/// the same key is folded in through `combine(prev, item, key)` in input
/// order. Output keeps first-occurrence order.
pub fn merge_items<T, K, F, C>(items: impl IntoIterator<Item = T>, key_fn: F, combine: C) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
    C: Fn(&T, T, &K) -> T,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut merged: Vec<T> = Vec::new();

    for item in items {
        let key = key_fn(&item);
        match index.get(&key).copied() {
            Some(idx) => {
                let next = combine(&merged[idx], item, &key);
                merged[idx] = next;
            }
            None => {
                index.insert(key, merged.len());
                merged.push(item);
            }
        }
    }

    merged
}
