//! Error types for the tree and the random-data harness.

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// Failures raised by [`OrderedTree`][crate::OrderedTree] and the value generator.
#[derive(Error, Debug)]
pub enum TreeError {
    /// Reserving memory for a node or a value failed.
    #[error("failed to allocate {what}")]
    Alloc {
        /// What was being allocated, either `"node"` or `"value"`.
        what: &'static str,
        /// The allocator's report.
        #[source]
        source: TryReserveError,
    },
}

impl TreeError {
    /// Creates a new allocation error for `what`.
    pub fn alloc(what: &'static str, source: TryReserveError) -> Self {
        Self::Alloc { what, source }
    }
}

/// Result alias for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Failures raised while building and printing a random tree.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// The requested string lengths form an empty range.
    #[error("invalid string length range: min {min} must be below max {max}")]
    InvalidLengthRange {
        /// Inclusive lower bound that was requested.
        min: usize,
        /// Exclusive upper bound that was requested.
        max: usize,
    },

    /// The tree could not be built.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// The dump could not be written.
    #[error("failed to write tree: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
