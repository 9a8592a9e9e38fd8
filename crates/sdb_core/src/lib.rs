//! # SDB Core
//!
//! In-memory student record store.
//!
//! This crate provides:
//! - [`Record`], an immutable student record with bounded name fields
//! - [`OrderedIndex`], an unbalanced binary search tree generic over a
//!   [`KeyOrder`] strategy ([`ByLastName`], [`ById`])
//! - [`Store`], which feeds every record into both indexes
//! - [`ingest`], which reads the paired names/IDs and marks sources
//!
//! ## Example
//!
//! ```rust
//! use sdb_core::{Record, Store};
//!
//! let mut store = Store::new();
//! store.insert(Record::new("Ann", "Lee", 100, 90));
//! store.insert(Record::new("Bo", "Kim", 101, 75));
//!
//! let names: Vec<_> = store.list_by_name().map(|r| r.last_name()).collect();
//! assert_eq!(names, ["Kim", "Lee"]);
//! assert_eq!(store.find_by_name("kim").map(|r| r.id()), Some(101));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
pub mod index;
pub mod ingest;
mod record;
mod store;

pub use config::{Config, NamePolicy, DEFAULT_MAX_NAME_LEN};
pub use error::{CoreError, CoreResult, NameField};
pub use index::{ById, ByLastName, KeyOrder, OrderedIndex};
pub use record::Record;
pub use store::{Store, StoreStats};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
