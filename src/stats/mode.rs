//! Shared mode and frequency kernels.
//!
//! Ties are broken deterministically: the highest count wins, and equal
//! counts fall back to the smallest value under the key's total order
//! (numeric minimum for numbers, lexicographic minimum for strings,
//! Monday-first for days).

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value, or `None` for empty input.
pub fn mode<T>(values: impl IntoIterator<Item = T>) -> Option<T>
where
    T: Eq + Hash + Ord,
{
    count(values)
        .into_iter()
        .max_by(|(va, ca), (vb, cb)| ca.cmp(cb).then_with(|| vb.cmp(va)))
        .map(|(value, _)| value)
}

/// Occurrence counts sorted by descending count, ties by ascending value.
pub fn frequency<T>(values: impl IntoIterator<Item = T>) -> Vec<(T, usize)>
where
    T: Eq + Hash + Ord,
{
    let mut rows: Vec<(T, usize)> = count(values).into_iter().collect();
    rows.sort_by(|(va, ca), (vb, cb)| cb.cmp(ca).then_with(|| va.cmp(vb)));
    rows
}

fn count<T>(values: impl IntoIterator<Item = T>) -> HashMap<T, usize>
where
    T: Eq + Hash,
{
    let mut counts = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}
