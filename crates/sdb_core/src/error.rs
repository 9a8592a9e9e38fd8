//! Error types for SDB core.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Which name field of a record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// The first (given) name.
    First,
    /// The last (family) name.
    Last,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first name"),
            Self::Last => f.write_str("last name"),
        }
    }
}

/// Errors that can occur while building the store.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An input source could not be opened.
    #[error("can't read from file {}: {source}", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error while reading an already opened source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A name exceeded the configured length bound.
    #[error("{field} on row {row} is {len} characters long (max {max})")]
    NameTooLong {
        /// The offending field.
        field: NameField,
        /// 1-based row number in the names source.
        row: usize,
        /// Length of the rejected name, in characters.
        len: usize,
        /// The configured maximum.
        max: usize,
    },
}

impl CoreError {
    /// Creates an open error for `path`.
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Creates a name-too-long error.
    pub fn name_too_long(field: NameField, row: usize, len: usize, max: usize) -> Self {
        Self::NameTooLong {
            field,
            row,
            len,
            max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_names_the_path() {
        let err = CoreError::open(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().starts_with("can't read from file missing.txt"));
    }

    #[test]
    fn name_too_long_message() {
        let err = CoreError::name_too_long(NameField::Last, 3, 25, 19);
        assert_eq!(
            err.to_string(),
            "last name on row 3 is 25 characters long (max 19)"
        );
    }
}
