//! Math-layer error types.
//!
//! The math itself is total. Only conversions from untyped input (slices,
//! strings) can fail.

/// Errors that can occur while converting untyped data into math types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// A flat matrix slice did not hold exactly one 4×4 matrix.
    #[error("expected {expected} matrix elements, got {actual}")]
    MatrixLength {
        /// Number of elements a 4×4 matrix needs.
        expected: usize,
        /// Number of elements that were supplied.
        actual: usize,
    },

    /// An angle solver name was not recognised.
    #[error("unknown angle solver `{0}` (expected `legacy` or `atan2`)")]
    UnknownSolver(String),
}
