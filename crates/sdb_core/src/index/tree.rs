//! Unbalanced binary search tree.

use super::order::KeyOrder;
use crate::record::Record;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

struct Node {
    record: Arc<Record>,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(record: Arc<Record>) -> Box<Self> {
        Box::new(Self {
            record,
            left: None,
            right: None,
        })
    }
}

/// Binary search tree over shared records, ordered by `O`.
///
/// `OrderedIndex` supports:
/// - Insertion (ties descend right, no rebalancing)
/// - In-order iteration
/// - Single-path exact lookup
///
/// The shape of the tree is fixed by insertion order. Already sorted input
/// degenerates into a list of depth `n`; every walk is iterative, so this
/// costs time but never stack.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use sdb_core::{ById, OrderedIndex, Record};
///
/// let mut index: OrderedIndex<ById> = OrderedIndex::new();
/// index.insert(Arc::new(Record::new("Bo", "Kim", 101, 75)));
/// index.insert(Arc::new(Record::new("Ann", "Lee", 100, 90)));
///
/// let ids: Vec<_> = index.iter().map(|r| r.id()).collect();
/// assert_eq!(ids, [100, 101]);
/// assert_eq!(index.find(&101).map(|r| r.last_name()), Some("Kim"));
/// ```
pub struct OrderedIndex<O: KeyOrder> {
    root: Option<Box<Node>>,
    len: usize,
    _order: PhantomData<O>,
}

impl<O: KeyOrder> OrderedIndex<O> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            _order: PhantomData,
        }
    }

    /// Inserts a record.
    ///
    /// Descends from the root, going left when the new record orders strictly
    /// before the node and right otherwise, and attaches a new leaf at the
    /// first empty slot.
    pub fn insert(&mut self, record: Arc<Record>) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match O::insert_cmp(&record, &node.record) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }
        *slot = Some(Node::new(record));
        self.len += 1;
    }

    /// Looks up a record by a single descent from the root.
    ///
    /// Returns the first node on the path that matches `query`. Other
    /// records with an equal key, off that path, are not reported.
    pub fn find(&self, query: &O::Query) -> Option<&Arc<Record>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match O::search_cmp(query, &node.record) {
                Ordering::Equal => return Some(&node.record),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Returns an iterator over the records in ascending key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Returns the number of records in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        stack.extend(self.root.as_deref().map(|n| (n, 1)));
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        deepest
    }
}

impl<O: KeyOrder> Default for OrderedIndex<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: KeyOrder> fmt::Debug for OrderedIndex<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedIndex")
            .field("len", &self.len)
            .field("depth", &self.depth())
            .finish()
    }
}

// Nodes are dropped through an explicit stack so a degenerate tree does not
// recurse once per level.
impl<O: KeyOrder> Drop for OrderedIndex<O> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<'a, O: KeyOrder> IntoIterator for &'a OrderedIndex<O> {
    type Item = &'a Arc<Record>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`OrderedIndex`].
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Arc<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl std::iter::FusedIterator for Iter<'_> {}
