//! Error type for LCS computations.
//!
//! The only failure mode is cooperative cancellation: inputs of any size,
//! including empty sequences, are always valid.

use thiserror::Error;

/// Errors produced by the cancellable entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LcsError {
    /// The cancellation signal fired while the DP table was being built.
    #[error("lcs computation cancelled at column {column} of {columns}")]
    Cancelled {
        /// 1-based column of `right` at which the signal was observed.
        column: usize,
        /// Total number of columns (`right.len()`).
        columns: usize,
    },
}

/// Result type alias for LCS operations.
pub type LcsResult<T> = Result<T, LcsError>;

impl LcsError {
    /// Returns true for [`LcsError::Cancelled`].
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LcsError::Cancelled { .. })
    }
}
