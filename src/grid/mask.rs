//! Building owned masks from caller buffers.

use ndarray::Array2;

use crate::error::{GridError, GridResult};

/// Build a mask from a flat row-major byte buffer.
///
/// # Arguments
/// * `data` - One byte per cell, non-zero = occupied
/// * `width` - Number of columns
/// * `height` - Number of rows
///
/// # Returns
/// Mask of shape (height, width)
pub fn mask_from_slice(data: &[u8], width: usize, height: usize) -> GridResult<Array2<bool>> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyGrid {
            rows: height,
            cols: width,
        });
    }
    let expected = width
        .checked_mul(height)
        .ok_or(GridError::Allocation { cells: usize::MAX })?;
    if data.len() != expected {
        return Err(GridError::SizeMismatch {
            width,
            height,
            expected,
            actual: data.len(),
        });
    }

    let mut cells = Vec::new();
    cells
        .try_reserve_exact(expected)
        .map_err(|_| GridError::Allocation { cells: expected })?;
    cells.extend(data.iter().map(|&v| v != 0));

    Array2::from_shape_vec((height, width), cells).map_err(|_| GridError::SizeMismatch {
        width,
        height,
        expected,
        actual: data.len(),
    })
}

/// Build a mask from row vectors, rejecting ragged input.
pub fn mask_from_rows(rows: &[Vec<bool>]) -> GridResult<Array2<bool>> {
    let cols = rows.first().map_or(0, Vec::len);
    if rows.is_empty() || cols == 0 {
        return Err(GridError::EmptyGrid {
            rows: rows.len(),
            cols,
        });
    }
    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(GridError::RaggedRows {
            row,
            expected: cols,
            actual: r.len(),
        });
    }

    Ok(Array2::from_shape_fn((rows.len(), cols), |(i, j)| rows[i][j]))
}
