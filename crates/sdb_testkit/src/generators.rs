//! Property-based test generators using proptest.
//!
//! Provides strategies for generating records and input files.

use proptest::prelude::*;
use sdb_core::Record;

/// Strategy for generating last names, mixing letter cases so that case
/// variants of the same name turn up.
pub fn last_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z]{1,6}").expect("Invalid regex")
}

/// Strategy for generating first names.
pub fn first_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-z]{0,8}").expect("Invalid regex")
}

/// Strategy for generating a record. IDs come from a small range so that
/// duplicates occur.
pub fn record_strategy() -> impl Strategy<Value = Record> {
    (
        first_name_strategy(),
        last_name_strategy(),
        -100i32..100,
        0i32..=100,
    )
        .prop_map(|(first, last, id, score)| Record::new(first, last, id, score))
}

/// Strategy for generating a batch of records.
pub fn records_strategy(max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..=max)
}
