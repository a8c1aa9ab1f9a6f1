use thiserror::Error;

/// Core error type shared across Wordforge crates.
///
/// Every variant except `Overflow` is a validation failure detected before a
/// generator touches its output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No character class is enabled.
    #[error("alphabet is empty: enable at least one character class")]
    EmptyAlphabet,
    /// Maximum length below 1.
    #[error("invalid length {0}: must be at least 1")]
    InvalidLength(usize),
    /// Length bounds out of order or below 1.
    #[error("invalid length range {min}..={max}: need 1 <= min <= max")]
    InvalidRange { min: usize, max: usize },
    /// Seed is empty after trimming surrounding whitespace.
    #[error("seed is empty")]
    EmptySeed,
    /// The enumeration size does not fit in 128 bits.
    #[error("output estimate overflows for {alphabet_size} symbols up to length {max_length}")]
    Overflow {
        alphabet_size: usize,
        max_length: usize,
    },
}

/// Convenience alias for results returned by Wordforge crates.
pub type Result<T> = std::result::Result<T, Error>;
