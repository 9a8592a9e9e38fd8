//! The dual-index record store.

use crate::index::{ById, ByLastName, Iter, OrderedIndex};
use crate::record::Record;
use std::sync::Arc;

/// Size and shape of a store's indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    /// Number of records.
    pub records: usize,
    /// Depth of the by-name tree.
    pub name_depth: usize,
    /// Depth of the by-ID tree.
    pub id_depth: usize,
}

/// In-memory record store with a by-name and a by-ID index.
///
/// Every record is inserted into both indexes in the order it arrives, and
/// both indexes point at the same allocation. The two trees take their
/// shapes independently from that one insertion sequence.
#[derive(Debug, Default)]
pub struct Store {
    by_name: OrderedIndex<ByLastName>,
    by_id: OrderedIndex<ById>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from records, inserting them in iteration order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Inserts a record into both indexes and returns the shared handle.
    pub fn insert(&mut self, record: Record) -> Arc<Record> {
        let record = Arc::new(record);
        self.by_name.insert(Arc::clone(&record));
        self.by_id.insert(Arc::clone(&record));
        record
    }

    /// Lists all records ordered by last name (case-sensitive, ties in
    /// insertion order).
    pub fn list_by_name(&self) -> Iter<'_> {
        self.by_name.iter()
    }

    /// Lists all records ordered by ID.
    pub fn list_by_id(&self) -> Iter<'_> {
        self.by_id.iter()
    }

    /// Finds a record by last name, ignoring ASCII case.
    ///
    /// See [`ByLastName`] for when a case variant can be missed.
    pub fn find_by_name(&self, name: &str) -> Option<&Arc<Record>> {
        self.by_name.find(name)
    }

    /// Finds a record by ID.
    pub fn find_by_id(&self, id: i32) -> Option<&Arc<Record>> {
        self.by_id.find(&id)
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Returns record count and tree depths.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            records: self.len(),
            name_depth: self.by_name.depth(),
            id_depth: self.by_id.depth(),
        }
    }
}

impl FromIterator<Record> for Store {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Store {
        Store::from_records([
            Record::new("Ann", "Lee", 100, 90),
            Record::new("Bo", "Kim", 101, 75),
            Record::new("Cy", "Lee", 102, 88),
        ])
    }

    #[test]
    fn list_by_name_keeps_ties_in_insertion_order() {
        let store = sample();
        let rows: Vec<_> = store
            .list_by_name()
            .map(|r| (r.last_name(), r.first_name(), r.id()))
            .collect();
        assert_eq!(
            rows,
            [("Kim", "Bo", 101), ("Lee", "Ann", 100), ("Lee", "Cy", 102)]
        );
    }

    #[test]
    fn list_by_id() {
        let ids: Vec<_> = sample().list_by_id().map(|r| r.id()).collect();
        assert_eq!(ids, [100, 101, 102]);
    }

    #[test]
    fn find_by_id() {
        let store = sample();
        let kim = store.find_by_id(101).unwrap();
        assert_eq!(kim.last_name(), "Kim");
        assert_eq!(kim.score(), 75);
        assert!(store.find_by_id(999).is_none());
    }

    #[test]
    fn find_by_name_ignores_case() {
        let store = sample();
        assert_eq!(store.find_by_name("kim").map(|r| r.id()), Some(101));
        assert_eq!(store.find_by_name("LEE").map(|r| r.id()), Some(100));
        assert!(store.find_by_name("Park").is_none());
    }

    #[test]
    fn both_indexes_share_records() {
        let mut store = Store::new();
        let handle = store.insert(Record::new("Ann", "Lee", 100, 90));
        assert_eq!(Arc::strong_count(&handle), 3);
        assert!(Arc::ptr_eq(store.find_by_name("lee").unwrap(), &handle));
        assert!(Arc::ptr_eq(store.find_by_id(100).unwrap(), &handle));
    }

    #[test]
    fn stats_report_shapes() {
        let store = sample();
        assert_eq!(
            store.stats(),
            StoreStats {
                records: 3,
                name_depth: 2,
                id_depth: 3,
            }
        );
        assert_eq!(Store::new().stats(), StoreStats::default());
    }
}
