//! Benchmark utilities.

use rand::seq::SliceRandom;
use rand::Rng;
use sdb_core::Record;

/// Generate `count` records with distinct IDs in random order.
pub fn shuffled_records(count: usize) -> Vec<Record> {
    let mut rng = rand::thread_rng();
    let mut records = sdb_testkit::scenarios::sorted(count);
    records.shuffle(&mut rng);
    records
}

/// Generate `count` IDs to look up, about half of which are present in a
/// store built from `shuffled_records(count)`.
pub fn lookup_ids(count: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    let upper = i32::try_from(count * 2).unwrap_or(i32::MAX);
    (0..count).map(|_| rng.gen_range(0..upper)).collect()
}
