//! # SDB Testkit
//!
//! Test utilities for SDB.
//!
//! This crate provides:
//! - Temporary input files in the names/IDs and marks formats
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sdb_testkit::prelude::*;
//!
//! #[test]
//! fn loads_scenario() {
//!     let files = InputFiles::from_records(&scenarios::lee_kim_lee());
//!     let store = files.load().unwrap();
//!     assert_eq!(store.len(), 3);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
