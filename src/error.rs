use std::fmt;

/// Errors raised by the union-find, the percolation grid and the threshold driver.
///
/// Both kinds are contract violations by the caller. Operations validate their
/// arguments before mutating anything, so an `Err` always leaves the receiver
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    /// A size or count that must be positive was zero.
    InvalidArgument(String),

    /// An element id or grid coordinate fell outside `[0, bound)`.
    IndexOutOfRange { index: usize, bound: usize },
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercolationError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            PercolationError::IndexOutOfRange { index, bound } => {
                write!(f, "index {index} out of range [0, {bound})")
            }
        }
    }
}

impl std::error::Error for PercolationError {}

pub type Result<T> = std::result::Result<T, PercolationError>;
