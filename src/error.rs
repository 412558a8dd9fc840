//! Error types for grid connectivity operations.

use thiserror::Error;

/// Errors that can occur while labeling, traversing or thinning a mask.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid has no rows or no columns
    #[error("empty grid: {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// Flat buffer length does not match the declared dimensions
    #[error("size mismatch: {width}x{height} grid needs {expected} cells, got {actual}")]
    SizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// Row-wise input is not rectangular
    #[error("ragged rows: row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Seed lies outside the grid
    #[error("invalid seed: ({row}, {col}) is outside the {rows}x{cols} grid")]
    SeedOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Seed refers to an unoccupied cell
    #[error("invalid seed: ({row}, {col}) is not occupied")]
    SeedUnoccupied { row: usize, col: usize },

    /// Output or working buffers could not be allocated
    #[error("allocation failed for {cells} cells")]
    Allocation { cells: usize },

    /// More regions than the label type can represent
    #[error("label overflow: more than {max} regions", max = u32::MAX)]
    LabelOverflow,
}

impl GridError {
    /// True for malformed or empty input grids.
    pub fn is_invalid_shape(&self) -> bool {
        matches!(
            self,
            GridError::EmptyGrid { .. } | GridError::SizeMismatch { .. } | GridError::RaggedRows { .. }
        )
    }

    /// True for seeds that are out of bounds or unoccupied.
    pub fn is_invalid_seed(&self) -> bool {
        matches!(
            self,
            GridError::SeedOutOfBounds { .. } | GridError::SeedUnoccupied { .. }
        )
    }
}

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Allocate a zero-filled buffer of `len` elements, reporting failure instead of aborting.
pub(crate) fn try_zeroed<T: Clone + Default>(len: usize) -> GridResult<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| GridError::Allocation { cells: len })?;
    buf.resize(len, T::default());
    Ok(buf)
}
