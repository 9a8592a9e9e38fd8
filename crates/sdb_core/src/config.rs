//! Store configuration.

/// Default maximum length of a first or last name, in characters.
///
/// Matches the 20-byte C string buffers of the legacy record files.
pub const DEFAULT_MAX_NAME_LEN: usize = 19;

/// What to do with a name longer than [`Config::max_name_len`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    /// Fail ingestion with [`CoreError::NameTooLong`](crate::CoreError::NameTooLong).
    #[default]
    Reject,
    /// Cut the name down to the limit and keep going.
    Truncate,
}

/// Configuration for building a store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum accepted length of a first or last name, in characters.
    pub max_name_len: usize,

    /// Handling of names that exceed `max_name_len`.
    pub name_policy: NamePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            name_policy: NamePolicy::Reject,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum name length.
    #[must_use]
    pub const fn max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }

    /// Sets the policy for over-long names.
    #[must_use]
    pub const fn name_policy(mut self, policy: NamePolicy) -> Self {
        self.name_policy = policy;
        self
    }
}
