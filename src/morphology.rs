//! Morphology: Skeletonize.
//!
//! Zhang-Suen thinning of binary masks (Zhang & Suen, CACM 1984,
//! https://doi.org/10.1145/357994.358023).
//!
//! ## Neighborhood
//!
//! Each pixel P1 is judged by its 8-neighbor ring, clockwise from north:
//!
//! ```text
//! P9 P2 P3
//! P8 P1 P4
//! P7 P6 P5
//! ```
//!
//! The mask is padded by one unoccupied cell on every side, so border pixels
//! see background outside the grid.

use ndarray::{s, Array2, ArrayView2};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{try_zeroed, GridError, GridResult};

/// Ring offsets P2..P9.
const RING: [(isize, isize); 8] = [
    (-1, 0),  // P2 N
    (-1, 1),  // P3 NE
    (0, 1),   // P4 E
    (1, 1),   // P5 SE
    (1, 0),   // P6 S
    (1, -1),  // P7 SW
    (0, -1),  // P8 W
    (-1, -1), // P9 NW
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subiteration {
    /// Removes south-east boundary and north-west corner pixels
    First,
    /// Removes north-west boundary and south-east corner pixels
    Second,
}

// ============================================================================
// Skeletonize
// ============================================================================

/// Thin a binary mask to a one-pixel-wide skeleton.
///
/// # Arguments
/// * `mask` - Binary mask (rows, cols), true = occupied
///
/// # Returns
/// Skeleton of the same shape; always a subset of the input
pub fn skeletonize(mask: ArrayView2<bool>) -> GridResult<Array2<bool>> {
    let (rows, cols) = mask.dim();
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyGrid { rows, cols });
    }

    let padded_dim = (rows + 2, cols + 2);
    let cells = padded_dim.0 * padded_dim.1;
    let mut padded = Array2::from_shape_vec(padded_dim, try_zeroed::<bool>(cells)?)
        .map_err(|_| GridError::Allocation { cells })?;
    padded.slice_mut(s![1..=rows, 1..=cols]).assign(&mask);

    // Pixels only ever turn off, so the initial set bounds every pass
    let candidates: Vec<(usize, usize)> = padded
        .indexed_iter()
        .filter(|(_, &v)| v)
        .map(|(ij, _)| ij)
        .collect();

    let mut passes = 0usize;
    loop {
        let removed_first = thin(&mut padded, &candidates, Subiteration::First);
        let removed_second = thin(&mut padded, &candidates, Subiteration::Second);
        passes += 1;
        trace!(passes, removed_first, removed_second, "thinning pass");

        if removed_first == 0 && removed_second == 0 {
            break;
        }
    }

    let skeleton = padded.slice(s![1..=rows, 1..=cols]).to_owned();
    debug!(
        rows,
        cols,
        passes,
        input = candidates.len(),
        output = skeleton.iter().filter(|&&v| v).count(),
        "skeletonized mask"
    );
    Ok(skeleton)
}

/// Run one subiteration, returning the number of pixels removed.
///
/// All removal decisions read the same snapshot and are applied afterwards.
fn thin(padded: &mut Array2<bool>, candidates: &[(usize, usize)], sub: Subiteration) -> usize {
    let snapshot = padded.view();
    let doomed: Vec<(usize, usize)> = candidates
        .par_iter()
        .copied()
        .filter(|&(i, j)| snapshot[[i, j]] && removable(&ring(&snapshot, i, j), sub))
        .collect();

    for &(i, j) in &doomed {
        padded[[i, j]] = false;
    }
    doomed.len()
}

/// Ring P2..P9 around an interior pixel of the padded mask.
#[inline]
fn ring(x: &ArrayView2<bool>, i: usize, j: usize) -> [bool; 8] {
    RING.map(|(di, dj)| x[[i.wrapping_add_signed(di), j.wrapping_add_signed(dj)]])
}

#[inline]
fn removable(p: &[bool; 8], sub: Subiteration) -> bool {
    // a) 2 <= B(P1) <= 6
    let occupied = p.iter().filter(|&&v| v).count();
    // b) exactly one 0->1 transition around P2, P3, ..., P9, P2
    let transitions = (0..8).filter(|&k| !p[k] && p[(k + 1) % 8]).count();

    let (p2, p4, p6, p8) = (p[0], p[2], p[4], p[6]);
    let (c, d) = match sub {
        Subiteration::First => (!(p2 && p4 && p6), !(p4 && p6 && p8)),
        Subiteration::Second => (!(p2 && p4 && p8), !(p2 && p6 && p8)),
    };

    (2..=6).contains(&occupied) && transitions == 1 && c && d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Connectivity;
    use crate::regions::label;

    fn occupied_cells(x: &Array2<bool>) -> Vec<(usize, usize)> {
        x.indexed_iter().filter(|(_, &v)| v).map(|(ij, _)| ij).collect()
    }

    #[test]
    fn test_bar_thins_to_centerline() {
        let mask = Array2::<bool>::from_elem((5, 20), true);
        let skel = skeletonize(mask.view()).unwrap();

        let expected: Vec<(usize, usize)> = (2..17).map(|c| (2, c)).collect();
        assert_eq!(occupied_cells(&skel), expected);
    }

    #[test]
    fn test_square_thins_to_point() {
        let mask = Array2::<bool>::from_elem((9, 9), true);
        let skel = skeletonize(mask.view()).unwrap();
        assert_eq!(occupied_cells(&skel), vec![(4, 4)]);
    }

    #[test]
    fn test_cross_keeps_both_arms() {
        let mask = Array2::from_shape_fn((15, 15), |(i, j)| i.abs_diff(7) <= 1 || j.abs_diff(7) <= 1);
        let skel = skeletonize(mask.view()).unwrap();

        for r in 1..=12 {
            assert!(skel[[r, 7]], "vertical arm missing at row {r}");
        }
        for c in 1..=12 {
            assert!(skel[[7, c]], "horizontal arm missing at col {c}");
        }
        assert_eq!(occupied_cells(&skel).len(), 12 + 12 - 1);

        let labeling = label(skel.view(), Connectivity::Eight).unwrap();
        assert_eq!(labeling.num_labels, 1);
    }

    #[test]
    fn test_thin_shapes_unchanged() {
        let mut mask = Array2::<bool>::from_elem((10, 10), false);
        mask.slice_mut(s![2..8, 4]).fill(true);
        mask[[0, 0]] = true;

        let skel = skeletonize(mask.view()).unwrap();
        assert_eq!(skel, mask);
    }

    #[test]
    fn test_output_is_subset_and_stable() {
        let mask = Array2::from_shape_fn((30, 40), |(i, j)| {
            let (di, dj) = (i as f32 - 15.0, j as f32 - 20.0);
            di * di / 144.0 + dj * dj / 324.0 <= 1.0
        });
        let skel = skeletonize(mask.view()).unwrap();

        for (&s, &m) in skel.iter().zip(mask.iter()) {
            assert!(!s || m);
        }
        assert!(skel.iter().any(|&v| v));
        assert_eq!(skeletonize(skel.view()).unwrap(), skel);
    }

    #[test]
    fn test_all_false() {
        let mask = Array2::<bool>::from_elem((4, 6), false);
        assert_eq!(skeletonize(mask.view()).unwrap(), mask);
    }

    #[test]
    fn test_empty_grid_error() {
        let mask = Array2::<bool>::from_elem((0, 6), false);
        assert!(skeletonize(mask.view()).unwrap_err().is_invalid_shape());
    }

    #[test]
    fn test_removable_conditions() {
        // End of a line: only one neighbor
        assert!(!removable(&[true, false, false, false, false, false, false, false], Subiteration::First));
        // Middle of a line: two transitions
        assert!(!removable(&[true, false, false, false, true, false, false, false], Subiteration::First));
        // North edge of a block (P4..P8 set) is left for the second subiteration
        let north_edge = [false, false, true, true, true, true, true, false];
        assert!(!removable(&north_edge, Subiteration::First));
        assert!(removable(&north_edge, Subiteration::Second));
    }
}
