/// Nesting depth accepted by [`JsonOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// What an object does when a member name appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicateKeys {
    /// Later members overwrite earlier ones.
    #[default]
    LastWins,
    /// The object fails to parse, with a `Duplicate key` message.
    Reject,
}

/// Configuration for building a [`JsonGrammar`](crate::JsonGrammar).
///
/// ```
/// use json_parser::{DuplicateKeys, JsonOptions, DEFAULT_MAX_DEPTH};
///
/// let strict = JsonOptions::new()
///     .with_duplicate_keys(DuplicateKeys::Reject)
///     .with_max_depth(16);
/// assert_eq!(strict.duplicate_keys, DuplicateKeys::Reject);
/// assert_eq!(strict.max_depth, 16);
/// assert_eq!(JsonOptions::default().max_depth, DEFAULT_MAX_DEPTH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JsonOptions {
    pub duplicate_keys: DuplicateKeys,
    /// How many arrays and objects may be open at once. The container that
    /// would go past it fails with `Nesting too deep`.
    pub max_depth: usize,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            duplicate_keys: DuplicateKeys::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl JsonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
