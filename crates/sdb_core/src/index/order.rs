//! Key ordering strategies.

use crate::record::Record;
use std::cmp::Ordering;

/// Ordering strategy for an [`OrderedIndex`](super::OrderedIndex).
///
/// Insertion and search use separate comparisons. They normally agree; the
/// name index is the exception (see [`ByLastName`]).
pub trait KeyOrder {
    /// The query type accepted by `find`.
    type Query: ?Sized;

    /// Orders a record being inserted relative to a record already in the
    /// tree. `Less` descends left; anything else descends right.
    fn insert_cmp(new: &Record, node: &Record) -> Ordering;

    /// Orders a search query relative to a node's record. `Equal` is a hit,
    /// `Less` descends left, `Greater` descends right.
    fn search_cmp(query: &Self::Query, node: &Record) -> Ordering;
}

/// Orders records by last name.
///
/// Insertion compares raw bytes, so `"Zed"` sorts before `"adams"`. Search
/// compares ASCII case-insensitively. A search descends by the folded
/// comparison through a tree shaped by the raw one, so a name differing only
/// in letter case from its ancestors can sit in a subtree the search never
/// enters, and `find` reports no match for it. This is long-standing lookup
/// behavior and is kept as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByLastName;

impl KeyOrder for ByLastName {
    type Query = str;

    fn insert_cmp(new: &Record, node: &Record) -> Ordering {
        new.last_name().cmp(node.last_name())
    }

    fn search_cmp(query: &str, node: &Record) -> Ordering {
        cmp_ignore_ascii_case(query, node.last_name())
    }
}

/// Orders records numerically by student ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct ById;

impl KeyOrder for ById {
    type Query = i32;

    fn insert_cmp(new: &Record, node: &Record) -> Ordering {
        new.id().cmp(&node.id())
    }

    fn search_cmp(query: &i32, node: &Record) -> Ordering {
        query.cmp(&node.id())
    }
}

/// `strcasecmp`-style comparison: both sides folded to ASCII lower case,
/// then compared bytewise.
fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|c| c.to_ascii_lowercase());
    let b = b.bytes().map(|c| c.to_ascii_lowercase());
    a.cmp(b)
}
