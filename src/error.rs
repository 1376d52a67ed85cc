//! Error types for fuzzy hash construction

use thiserror::Error;

/// Result type alias for fuzzy hashing operations
pub type Result<T> = std::result::Result<T, FuzzyError>;

/// Failures surfaced when a fuzzy hash is finalized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FuzzyError {
    /// The input is larger than the biggest block size can summarize
    #[error("input of {size} bytes exceeds the maximum of {max} bytes")]
    TooLarge { size: u64, max: u64 },

    /// A declared input length disagrees with what was actually hashed
    #[error("declared input length {declared} does not match {actual} bytes")]
    LengthMismatch { declared: u64, actual: u64 },

    /// The smallest block size was retired before the input justified it
    #[error("block size {block_size} was retired too early for {total_size} bytes of input")]
    PrematureReduction { block_size: u32, total_size: u64 },

    /// No tracked block size produced enough digest symbols
    #[error("block size {block_size} has only {digest_len} digest symbols")]
    DigestUnderflow { block_size: u32, digest_len: usize },
}
