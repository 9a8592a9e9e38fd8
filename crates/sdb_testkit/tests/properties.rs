//! Property tests for the ordered indexes.

use proptest::prelude::*;
use sdb_core::{Record, Store};
use sdb_testkit::generators::{last_name_strategy, records_strategy};
use std::collections::HashSet;

proptest! {
    #[test]
    fn name_listing_is_sorted(records in records_strategy(64)) {
        let store = Store::from_records(records);
        let names: Vec<_> = store.list_by_name().map(|r| r.last_name().to_owned()).collect();
        prop_assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn id_listing_is_sorted(records in records_strategy(64)) {
        let store = Store::from_records(records);
        let ids: Vec<_> = store.list_by_id().map(|r| r.id()).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn listings_yield_every_record_once(records in records_strategy(64)) {
        let n = records.len();
        let store = Store::from_records(records);

        prop_assert_eq!(store.len(), n);
        prop_assert_eq!(store.list_by_name().count(), n);
        prop_assert_eq!(store.list_by_id().count(), n);

        // Each node is a distinct allocation, so pointer identity detects
        // a record visited twice.
        let by_name: HashSet<_> = store.list_by_name().map(|r| std::sync::Arc::as_ptr(r)).collect();
        let by_id: HashSet<_> = store.list_by_id().map(|r| std::sync::Arc::as_ptr(r)).collect();
        prop_assert_eq!(by_name.len(), n);
        prop_assert_eq!(&by_name, &by_id);
    }

    #[test]
    fn ties_list_in_insertion_order(ids in prop::collection::vec(0i32..5, 0..32)) {
        let records = ids.iter().enumerate().map(|(seq, &id)| Record::new("X", "Same", id, seq as i32));
        let store = Store::from_records(records);
        let by_id: Vec<_> = store.list_by_id().map(|r| (r.id(), r.score())).collect();
        prop_assert!(by_id.windows(2).all(|w| w[0] <= w[1]));
        let by_name: Vec<_> = store.list_by_name().map(|r| r.score()).collect();
        prop_assert_eq!(by_name, (0..ids.len() as i32).collect::<Vec<_>>());
    }

    #[test]
    fn find_by_id_is_exact(records in records_strategy(64), query in -110i32..110) {
        let inserted: HashSet<_> = records.iter().map(Record::id).collect();
        let store = Store::from_records(records);
        match store.find_by_id(query) {
            Some(found) => prop_assert_eq!(found.id(), query),
            None => prop_assert!(!inserted.contains(&query)),
        }
    }

    #[test]
    fn find_by_name_hit_matches_ignoring_case(
        records in records_strategy(64),
        query in last_name_strategy(),
    ) {
        let store = Store::from_records(records);
        if let Some(found) = store.find_by_name(&query) {
            prop_assert!(found.last_name().eq_ignore_ascii_case(&query));
        }
    }
}
