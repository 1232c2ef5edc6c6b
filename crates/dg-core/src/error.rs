//! Configuration error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` via `From`.

use thiserror::Error;

use crate::Cell;

/// Errors raised while validating a configuration or a layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error("{what} {cell} lies outside the {size}x{size} grid")]
    OutOfBounds {
        what: &'static str,
        cell: Cell,
        size: u16,
    },

    #[error("layout needs {requested} cells but only {available} are free")]
    TooCrowded { requested: usize, available: usize },

    #[error("{what} at {cell} overlaps another placement")]
    Overlap { what: &'static str, cell: Cell },
}

/// Shorthand result type for `dg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
