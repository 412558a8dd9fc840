//! Neighbor enumeration over a binary mask.
//!
//! ## Enumeration Order
//!
//! Neighbors are always produced in this fixed order:
//!
//! | Position | Direction | Offset (row, col) | Connectivity |
//! |----------|-----------|-------------------|--------------|
//! | 0 | N  | (-1,  0) | 4, 8 |
//! | 1 | W  | ( 0, -1) | 4, 8 |
//! | 2 | S  | (+1,  0) | 4, 8 |
//! | 3 | E  | ( 0, +1) | 4, 8 |
//! | 4 | NW | (-1, -1) | 8 |
//! | 5 | NE | (-1, +1) | 8 |
//! | 6 | SW | (+1, -1) | 8 |
//! | 7 | SE | (+1, +1) | 8 |
//!
//! Out-of-bounds positions are skipped, so corner and edge cells yield fewer
//! neighbors. Traversal order, predecessor links and leaf sets all depend on
//! this table.

use ndarray::ArrayView2;

use crate::error::{GridError, GridResult};

/// Neighbor offsets in enumeration order. The first four are orthogonal.
const OFFSETS: [(isize, isize); 8] = [
    (-1, 0),  // N
    (0, -1),  // W
    (1, 0),   // S
    (0, 1),   // E
    (-1, -1), // NW
    (-1, 1),  // NE
    (1, -1),  // SW
    (1, 1),   // SE
];

/// Which neighboring cells count as adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Orthogonal neighbors only (N, W, S, E)
    Four,
    /// Orthogonal plus diagonal neighbors
    #[default]
    Eight,
}

impl Connectivity {
    /// Build from the `eight_way` flag used by the bindings.
    pub fn from_eight_way(eight_way: bool) -> Self {
        if eight_way {
            Connectivity::Eight
        } else {
            Connectivity::Four
        }
    }

    /// Offsets considered under this connectivity, in enumeration order.
    #[inline]
    fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::Four => &OFFSETS[..4],
            Connectivity::Eight => &OFFSETS,
        }
    }
}

/// A `(row, col)` cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major linear index for a grid with `cols` columns.
    #[inline]
    pub fn ravel(self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for [usize; 2] {
    fn from(c: Coord) -> Self {
        [c.row, c.col]
    }
}

/// Read-only adjacency view over a validated, non-empty mask.
#[derive(Debug, Clone, Copy)]
pub struct Adjacency<'a> {
    mask: ArrayView2<'a, bool>,
    connectivity: Connectivity,
}

impl<'a> Adjacency<'a> {
    /// Wrap a mask, rejecting grids with no rows or no columns.
    pub fn new(mask: ArrayView2<'a, bool>, connectivity: Connectivity) -> GridResult<Self> {
        let (rows, cols) = mask.dim();
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        Ok(Self { mask, connectivity })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.mask.nrows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.mask.ncols()
    }

    /// Total number of cells.
    #[inline]
    pub fn cells(&self) -> usize {
        self.rows() * self.cols()
    }

    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Whether `coord` lies inside the grid.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows() && coord.col < self.cols()
    }

    /// Whether `coord` is occupied. Out-of-bounds coordinates are unoccupied.
    #[inline]
    pub fn occupied(&self, coord: Coord) -> bool {
        self.mask
            .get((coord.row, coord.col))
            .copied()
            .unwrap_or(false)
    }

    /// In-bounds neighbors of `coord` in enumeration order.
    ///
    /// The iterator is double-ended; `.rev()` yields the same cells back to front.
    pub fn neighbors(&self, coord: Coord) -> impl DoubleEndedIterator<Item = Coord> + 'static {
        let (rows, cols) = (self.rows(), self.cols());
        self.connectivity
            .offsets()
            .iter()
            .filter_map(move |&(dr, dc)| {
                let row = coord.row.checked_add_signed(dr)?;
                let col = coord.col.checked_add_signed(dc)?;
                (row < rows && col < cols).then_some(Coord { row, col })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn coords(list: &[(usize, usize)]) -> Vec<Coord> {
        list.iter().map(|&c| Coord::from(c)).collect()
    }

    #[test]
    fn test_four_way_order_interior() {
        let mask = Array2::<bool>::from_elem((3, 3), true);
        let adj = Adjacency::new(mask.view(), Connectivity::Four).unwrap();

        let n: Vec<Coord> = adj.neighbors(Coord::new(1, 1)).collect();
        assert_eq!(n, coords(&[(0, 1), (1, 0), (2, 1), (1, 2)]));
    }

    #[test]
    fn test_eight_way_order_interior() {
        let mask = Array2::<bool>::from_elem((3, 3), true);
        let adj = Adjacency::new(mask.view(), Connectivity::Eight).unwrap();

        let n: Vec<Coord> = adj.neighbors(Coord::new(1, 1)).collect();
        assert_eq!(
            n,
            coords(&[(0, 1), (1, 0), (2, 1), (1, 2), (0, 0), (0, 2), (2, 0), (2, 2)])
        );

        let reversed: Vec<Coord> = adj.neighbors(Coord::new(1, 1)).rev().collect();
        assert_eq!(reversed.first(), Some(&Coord::new(2, 2)));
        assert_eq!(reversed.last(), Some(&Coord::new(0, 1)));
    }

    #[test]
    fn test_corner_skips_out_of_bounds() {
        let mask = Array2::<bool>::from_elem((4, 5), false);
        let adj = Adjacency::new(mask.view(), Connectivity::Eight).unwrap();

        let top_left: Vec<Coord> = adj.neighbors(Coord::new(0, 0)).collect();
        assert_eq!(top_left, coords(&[(1, 0), (0, 1), (1, 1)]));

        let bottom_right: Vec<Coord> = adj.neighbors(Coord::new(3, 4)).collect();
        assert_eq!(bottom_right, coords(&[(2, 4), (3, 3), (2, 3)]));
    }

    #[test]
    fn test_single_cell_has_no_neighbors() {
        let mask = Array2::<bool>::from_elem((1, 1), true);
        let adj = Adjacency::new(mask.view(), Connectivity::Eight).unwrap();
        assert_eq!(adj.neighbors(Coord::new(0, 0)).count(), 0);
    }

    #[test]
    fn test_occupied_and_bounds() {
        let mut mask = Array2::<bool>::from_elem((2, 3), false);
        mask[[1, 2]] = true;
        let adj = Adjacency::new(mask.view(), Connectivity::Four).unwrap();

        assert!(adj.occupied(Coord::new(1, 2)));
        assert!(!adj.occupied(Coord::new(0, 0)));
        assert!(!adj.occupied(Coord::new(2, 0)));
        assert!(!adj.occupied(Coord::new(0, 3)));
        assert!(adj.contains(Coord::new(1, 2)));
        assert!(!adj.contains(Coord::new(1, 3)));
        assert_eq!(adj.cells(), 6);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let mask = Array2::<bool>::from_elem((0, 4), false);
        let err = Adjacency::new(mask.view(), Connectivity::Four).unwrap_err();
        assert_eq!(err, GridError::EmptyGrid { rows: 0, cols: 4 });
    }

    #[test]
    fn test_connectivity_flag() {
        assert_eq!(Connectivity::from_eight_way(true), Connectivity::Eight);
        assert_eq!(Connectivity::from_eight_way(false), Connectivity::Four);
        assert_eq!(Connectivity::default(), Connectivity::Eight);
    }

    #[test]
    fn test_ravel() {
        assert_eq!(Coord::new(2, 3).ravel(10), 23);
    }
}
