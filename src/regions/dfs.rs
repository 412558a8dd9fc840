//! Seeded depth-first traversal of one connected region.
//!
//! The search runs on an explicit stack of `(cell, predecessor index)` pairs so
//! long one-pixel-wide paths cannot exhaust the call stack. Neighbors are pushed
//! in reverse enumeration order, which makes the first enumerated neighbor
//! (north) the next one explored.
//!
//! ## Leaves
//!
//! The seed is always leaf 0. Any other cell is a leaf when, at the moment it
//! is visited, it pushes no neighbor: every occupied neighbor has already been
//! visited. A seed in the middle of a path therefore yields three leaves (the
//! seed and both path ends) while a seed at one end yields two.

use ndarray::{Array2, ArrayView2};
use tracing::debug;

use crate::error::{try_zeroed, GridError, GridResult};
use crate::grid::{Adjacency, Connectivity, Coord};

/// Predecessor value stored for the seed.
pub const ROOT_PREDECESSOR: i64 = -1;

/// Result of a single-seed traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    /// Cells in order of discovery; entry 0 is the seed
    pub visited: Vec<Coord>,
    /// Index into `visited` of each cell's discoverer, `ROOT_PREDECESSOR` for the seed
    pub predecessors: Vec<i64>,
    /// Indices into `visited` of dead-end cells, in visit order
    pub leaves: Vec<usize>,
}

impl Traversal {
    /// Number of visited cells.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Predecessor of visit `index`, `None` for the seed.
    pub fn predecessor(&self, index: usize) -> Option<usize> {
        self.predecessors
            .get(index)
            .and_then(|&p| usize::try_from(p).ok())
    }

    /// Visit indices from `index` back to the seed, inclusive on both ends.
    ///
    /// Returns an empty path for an index outside the traversal.
    pub fn path_to_root(&self, index: usize) -> Vec<usize> {
        if index >= self.len() {
            return Vec::new();
        }
        let mut path = vec![index];
        let mut current = index;
        while let Some(p) = self.predecessor(current) {
            path.push(p);
            current = p;
        }
        path
    }

    /// Visited cells as an (N, 2) array of `[row, col]` pairs.
    pub fn visited_array(&self) -> Array2<i64> {
        Array2::from_shape_fn((self.len(), 2), |(i, k)| {
            let c = self.visited[i];
            if k == 0 {
                c.row as i64
            } else {
                c.col as i64
            }
        })
    }
}

/// Traverse the connected region containing `seed`.
///
/// # Arguments
/// * `mask` - Binary mask (rows, cols), true = occupied
/// * `seed` - Starting cell; must be in bounds and occupied
/// * `connectivity` - 4- or 8-connected adjacency
///
/// # Returns
/// Visit order, predecessor links and leaf indices covering the whole region
pub fn traverse(
    mask: ArrayView2<bool>,
    seed: Coord,
    connectivity: Connectivity,
) -> GridResult<Traversal> {
    let adj = Adjacency::new(mask, connectivity)?;
    if !adj.contains(seed) {
        return Err(GridError::SeedOutOfBounds {
            row: seed.row,
            col: seed.col,
            rows: adj.rows(),
            cols: adj.cols(),
        });
    }
    if !adj.occupied(seed) {
        return Err(GridError::SeedUnoccupied {
            row: seed.row,
            col: seed.col,
        });
    }

    let cols = adj.cols();
    let mut seen: Vec<bool> = try_zeroed(adj.cells())?;
    let mut stack: Vec<(Coord, i64)> = vec![(seed, ROOT_PREDECESSOR)];
    let mut result = Traversal {
        visited: Vec::new(),
        predecessors: Vec::new(),
        leaves: vec![0],
    };

    while let Some((p, predecessor)) = stack.pop() {
        let p_idx = p.ravel(cols);
        // Cells reached from several discoverers sit on the stack more than once
        if seen[p_idx] {
            continue;
        }
        seen[p_idx] = true;

        let index = result.visited.len();
        result.visited.push(p);
        result.predecessors.push(predecessor);

        let mut dead_end = true;
        for n in adj.neighbors(p).rev() {
            if !seen[n.ravel(cols)] && adj.occupied(n) {
                stack.push((n, index as i64));
                dead_end = false;
            }
        }

        if dead_end && index != 0 {
            result.leaves.push(index);
        }
    }

    debug!(
        row = seed.row,
        col = seed.col,
        ?connectivity,
        visited = result.visited.len(),
        leaves = result.leaves.len(),
        "traversed region"
    );

    Ok(result)
}
