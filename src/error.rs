use thiserror::Error;

/// Errors returned by the selection routines.
///
/// Every variant is raised before the buffer is touched, so a failed call
/// never leaves a partially reordered buffer behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The buffer has no elements.
    #[error("cannot select from an empty buffer")]
    EmptyInput,

    /// The requested rank does not address an element of the buffer.
    #[error("rank {k} is out of range for a buffer of length {len}")]
    InvalidRank { k: usize, len: usize },

    /// The buffer holds a NaN or an infinity at `index`.
    #[error("non-finite value at index {index}")]
    NonFinite { index: usize },
}

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, Error>;
