//! Partitioned window operations over in-memory record sets
//!
//! Both helpers group records by a key into ordered partitions, stable-sort
//! each partition, and then scan it. Output is ordered by partition key, so
//! results depend on input order only where the sort key ties.

use std::collections::BTreeMap;
use std::iter;

fn partition<K: Ord, T>(keyed: impl IntoIterator<Item = (K, T)>) -> BTreeMap<K, Vec<T>> {
    let mut partitions: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for (k, record) in keyed {
        partitions.entry(k).or_default().push(record);
    }
    partitions
}

/// Keep the top-ranked record of each key ("latest wins").
///
/// Records whose key is `None` are discarded. Within a key, records are
/// ranked by `rank` descending; ties keep the record that came first in the
/// input.
pub fn latest_per_key<T, K, S, FK, FS>(records: Vec<T>, key: FK, rank: FS) -> Vec<T>
where
    K: Ord,
    S: Ord,
    FK: Fn(&T) -> Option<K>,
    FS: Fn(&T) -> S,
{
    let keyed = records
        .into_iter()
        .filter_map(|record| key(&record).map(|k| (k, record)));

    partition(keyed)
        .into_values()
        .filter_map(|mut records| {
            records.sort_by(|a, b| rank(b).cmp(&rank(a)));
            records.into_iter().next()
        })
        .collect()
}

/// Pair each record with the ordering value of the next record in its
/// partition (SQL `LEAD`).
///
/// Partitions are stable-sorted ascending by `order`; the last record of a
/// partition is paired with `None`.
pub fn with_next<T, K, S, FK, FS>(records: Vec<T>, key: FK, order: FS) -> Vec<(T, Option<S>)>
where
    K: Ord,
    S: Ord,
    FK: Fn(&T) -> K,
    FS: Fn(&T) -> S,
{
    let keyed = records.into_iter().map(|record| (key(&record), record));

    partition(keyed)
        .into_values()
        .flat_map(|mut records| {
            records.sort_by_key(|record| order(record));
            let next: Vec<Option<S>> = records
                .iter()
                .skip(1)
                .map(|record| Some(order(record)))
                .chain(iter::once(None))
                .collect();
            records.into_iter().zip(next)
        })
        .collect()
}

#[cfg(test)]
#[path = "window_test.rs"]
mod tests;
