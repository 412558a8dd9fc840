//! Connected-component labeling.
//!
//! Scans the mask in row-major order. The first unlabeled occupied cell of each
//! region starts a flood fill over an explicit stack, so label 1 belongs to the
//! region whose first cell comes first in scan order, label 2 to the next, etc.

use ndarray::{Array2, ArrayView2};
use tracing::debug;

use crate::error::{try_zeroed, GridError, GridResult};
use crate::grid::{Adjacency, Connectivity, Coord};

/// Label grid with its region count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeling {
    /// Same shape as the input; 0 = unoccupied, 1..=num_labels = region id
    pub labels: Array2<u32>,
    /// Number of regions found
    pub num_labels: u32,
}

impl Labeling {
    /// Cell count per label. Index 0 counts the background.
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.num_labels as usize + 1];
        for &l in self.labels.iter() {
            sizes[l as usize] += 1;
        }
        sizes
    }
}

/// Label every connected region of occupied cells.
///
/// # Arguments
/// * `mask` - Binary mask (rows, cols), true = occupied
/// * `connectivity` - 4- or 8-connected adjacency
///
/// # Returns
/// Label grid of the same shape plus the number of regions
pub fn label(mask: ArrayView2<bool>, connectivity: Connectivity) -> GridResult<Labeling> {
    let adj = Adjacency::new(mask, connectivity)?;
    let (rows, cols) = (adj.rows(), adj.cols());

    let mut labels: Vec<u32> = try_zeroed(adj.cells())?;
    let mut stack: Vec<Coord> = Vec::new();
    let mut next_label = 0u32;

    for ((row, col), &occupied) in mask.indexed_iter() {
        if !occupied || labels[row * cols + col] != 0 {
            continue;
        }

        next_label = next_label.checked_add(1).ok_or(GridError::LabelOverflow)?;
        let seed = Coord::new(row, col);
        labels[seed.ravel(cols)] = next_label;
        stack.push(seed);

        // Cells are labeled when pushed so each enters the stack once
        while let Some(p) = stack.pop() {
            for n in adj.neighbors(p) {
                let idx = n.ravel(cols);
                if labels[idx] == 0 && adj.occupied(n) {
                    labels[idx] = next_label;
                    stack.push(n);
                }
            }
        }
    }

    debug!(rows, cols, ?connectivity, num_labels = next_label, "labeled mask");

    let labels = Array2::from_shape_vec((rows, cols), labels)
        .map_err(|_| GridError::Allocation { cells: rows * cols })?;
    Ok(Labeling {
        labels,
        num_labels: next_label,
    })
}
