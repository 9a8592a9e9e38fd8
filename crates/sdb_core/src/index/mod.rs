//! Ordered indexes over shared records.
//!
//! An [`OrderedIndex`] is an unbalanced binary search tree. The ordering it
//! is built and searched with comes from a [`KeyOrder`] strategy, so one tree
//! implementation serves both the by-name and the by-ID index.

mod order;
mod tree;

pub use order::{ById, ByLastName, KeyOrder};
pub use tree::{Iter, OrderedIndex};
