//! Student record type.

use crate::config::{Config, NamePolicy};
use crate::error::{CoreError, CoreResult, NameField};

/// One student's name, ID and score.
///
/// Records are immutable once built. The store hands out the same
/// allocation to both of its indexes, so nothing may change a record
/// after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    first_name: String,
    last_name: String,
    id: i32,
    score: i32,
}

impl Record {
    /// Creates a record without checking name lengths.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        id: i32,
        score: i32,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            id,
            score,
        }
    }

    /// Creates a record, enforcing `config.max_name_len` on both names.
    ///
    /// `row` is the 1-based source row, used in error reports.
    pub fn bounded(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        id: i32,
        score: i32,
        config: &Config,
        row: usize,
    ) -> CoreResult<Self> {
        let first_name = bound_name(first_name.into(), NameField::First, row, config)?;
        let last_name = bound_name(last_name.into(), NameField::Last, row, config)?;
        Ok(Self {
            first_name,
            last_name,
            id,
            score,
        })
    }

    /// Returns the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the student ID.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Returns the total score.
    pub fn score(&self) -> i32 {
        self.score
    }
}

fn bound_name(name: String, field: NameField, row: usize, config: &Config) -> CoreResult<String> {
    let len = name.chars().count();
    if len <= config.max_name_len {
        return Ok(name);
    }

    match config.name_policy {
        NamePolicy::Reject => Err(CoreError::name_too_long(
            field,
            row,
            len,
            config.max_name_len,
        )),
        NamePolicy::Truncate => {
            tracing::warn!(
                %field,
                row,
                len,
                max = config.max_name_len,
                "truncating over-long name"
            );
            Ok(name.chars().take(config.max_name_len).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let record = Record::new("Ann", "Lee", 100, 90);
        assert_eq!(record.first_name(), "Ann");
        assert_eq!(record.last_name(), "Lee");
        assert_eq!(record.id(), 100);
        assert_eq!(record.score(), 90);
    }

    #[test]
    fn bounded_accepts_names_at_the_limit() {
        let config = Config::new().max_name_len(3);
        let record = Record::bounded("Ann", "Lee", 1, 2, &config, 1).unwrap();
        assert_eq!(record.last_name(), "Lee");
    }

    #[test]
    fn bounded_rejects_long_last_name() {
        let config = Config::new().max_name_len(4);
        let err = Record::bounded("Ann", "Leeson", 1, 2, &config, 7).unwrap_err();
        match err {
            CoreError::NameTooLong {
                field,
                row,
                len,
                max,
            } => {
                assert_eq!(field, NameField::Last);
                assert_eq!(row, 7);
                assert_eq!(len, 6);
                assert_eq!(max, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bounded_truncates_on_char_boundary() {
        let config = Config::new()
            .max_name_len(3)
            .name_policy(NamePolicy::Truncate);
        let record = Record::bounded("Zoë-Anne", "Müller", 1, 2, &config, 1).unwrap();
        assert_eq!(record.first_name(), "Zoë");
        assert_eq!(record.last_name(), "Mül");
    }
}
