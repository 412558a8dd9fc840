//! GridConn Rust Extensions
//!
//! Connectivity analysis of 2-D binary masks, with Python bindings via PyO3
//! and WASM bindings for JavaScript.
//!
//! ## Mask Format
//! Masks are `(rows, cols)` boolean arrays addressed as `(row, col)`:
//! - **Python**: 2-D `numpy.bool_` arrays
//! - **WASM**: flat row-major byte buffers, non-zero = occupied
//! - **Rust**: any `ndarray::ArrayView2<bool>`
//!
//! ## Operations
//! - **Labeling**: every maximal connected region gets a label `1..=K`, in
//!   row-major order of each region's first cell; background stays 0
//! - **Traversal**: depth-first search from one seed, returning the visit
//!   order, a predecessor per visited cell (a spanning tree rooted at the
//!   seed) and the tree's dead ends
//! - **Skeletonize**: Zhang-Suen thinning to one-pixel-wide lines
//!
//! Labeling and traversal take a [`Connectivity`] (4- or 8-connected). Every
//! call owns its working buffers; nothing is shared between calls, so
//! independent calls may run on different threads.

pub mod error;
pub mod grid;
pub mod morphology;
pub mod regions;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{GridError, GridResult};
pub use grid::{mask_from_rows, mask_from_slice, Adjacency, Connectivity, Coord};
pub use morphology::skeletonize;
pub use regions::{
    label, label_many, traverse, traverse_many, Labeling, Traversal, ROOT_PREDECESSOR,
};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
    use pyo3::exceptions::{PyMemoryError, PyValueError};
    use pyo3::prelude::*;
    use pyo3::types::PyDict;

    use crate::error::GridError;
    use crate::grid::{Connectivity, Coord};
    use crate::morphology;
    use crate::regions::{label, traverse};

    impl From<GridError> for PyErr {
        fn from(err: GridError) -> PyErr {
            match err {
                GridError::Allocation { .. } => PyMemoryError::new_err(err.to_string()),
                _ => PyValueError::new_err(err.to_string()),
            }
        }
    }

    // ========================================================================
    // Connected Components
    // ========================================================================

    /// Label connected regions of a 2-D bool mask.
    ///
    /// Returns a uint32 array of the same shape: 0 = background,
    /// 1..K = region ids in row-major order of discovery.
    #[pyfunction]
    #[pyo3(signature = (mask, eight_way=true))]
    pub fn connected_components<'py>(
        py: Python<'py>,
        mask: PyReadonlyArray2<'py, bool>,
        eight_way: bool,
    ) -> PyResult<Bound<'py, PyArray2<u32>>> {
        let view = mask.as_array();
        let connectivity = Connectivity::from_eight_way(eight_way);
        let labeling = py.allow_threads(|| label(view, connectivity))?;
        Ok(labeling.labels.into_pyarray(py))
    }

    // ========================================================================
    // Depth-First Search
    // ========================================================================

    /// Depth-first search from `seed` over its connected region.
    ///
    /// Returns a dict with:
    /// * `visited` - int64 (N, 2) array of (row, col) in visit order
    /// * `predecessors` - int64 (N,) indices into `visited`, -1 for the seed
    /// * `leaves` - int64 indices into `visited` of dead ends, seed first
    #[pyfunction]
    #[pyo3(signature = (mask, seed, eight_way=true))]
    pub fn dfs<'py>(
        py: Python<'py>,
        mask: PyReadonlyArray2<'py, bool>,
        seed: (usize, usize),
        eight_way: bool,
    ) -> PyResult<Bound<'py, PyDict>> {
        let view = mask.as_array();
        let connectivity = Connectivity::from_eight_way(eight_way);
        let traversal = py.allow_threads(|| traverse(view, Coord::from(seed), connectivity))?;

        let visited = traversal.visited_array();
        let leaves: Vec<i64> = traversal.leaves.iter().map(|&i| i as i64).collect();

        let out = PyDict::new(py);
        out.set_item("visited", visited.into_pyarray(py))?;
        out.set_item("predecessors", traversal.predecessors.into_pyarray(py))?;
        out.set_item("leaves", leaves.into_pyarray(py))?;
        Ok(out)
    }

    // ========================================================================
    // Skeletonize
    // ========================================================================

    /// Thin a 2-D bool mask to a one-pixel-wide skeleton (Zhang-Suen).
    #[pyfunction]
    pub fn skeletonize<'py>(
        py: Python<'py>,
        mask: PyReadonlyArray2<'py, bool>,
    ) -> PyResult<Bound<'py, PyArray2<bool>>> {
        let view = mask.as_array();
        let skeleton = py.allow_threads(|| morphology::skeletonize(view))?;
        Ok(skeleton.into_pyarray(py))
    }

    #[pymodule]
    pub fn gridconn_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(connected_components, m)?)?;
        m.add_function(wrap_pyfunction!(dfs, m)?)?;
        m.add_function(wrap_pyfunction!(skeletonize, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::gridconn_rust;
