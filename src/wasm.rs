//! WebAssembly exports for GridConn.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! ## Mask Format
//!
//! Masks are flat row-major byte buffers of length `width * height`;
//! any non-zero byte is occupied. Errors are thrown as JS `Error`s.

use std::num::TryFromIntError;

use wasm_bindgen::prelude::*;

use crate::grid::{mask_from_slice, Connectivity, Coord};
use crate::morphology;
use crate::regions::{label, traverse, Traversal};

// ============================================================================
// Connected Components
// ============================================================================

/// Label connected regions.
///
/// # Arguments
/// * `data` - Flat mask bytes (length = width * height)
/// * `width` - Mask width in cells
/// * `height` - Mask height in cells
/// * `eight_way` - Use 8-connectivity instead of 4
///
/// # Returns
/// Flat row-major labels, 0 = background
#[wasm_bindgen]
pub fn connected_components_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    eight_way: bool,
) -> Result<Vec<u32>, JsError> {
    let mask = mask_from_slice(data, width, height)?;
    let labeling = label(mask.view(), Connectivity::from_eight_way(eight_way))?;
    Ok(labeling.labels.iter().copied().collect())
}

// ============================================================================
// Depth-First Search
// ============================================================================

/// Depth-first search from a seed cell.
///
/// # Returns
/// Flat array `[N, r0, c0, ..., rN-1, cN-1, p0, ..., pN-1, L, leaf0, ..., leafL-1]`
/// where `p` are predecessor indices (-1 for the seed).
#[wasm_bindgen]
pub fn dfs_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    seed_row: usize,
    seed_col: usize,
    eight_way: bool,
) -> Result<Vec<i32>, JsError> {
    let mask = mask_from_slice(data, width, height)?;
    let traversal = traverse(
        mask.view(),
        Coord::new(seed_row, seed_col),
        Connectivity::from_eight_way(eight_way),
    )?;
    Ok(encode_traversal(&traversal)?)
}

fn encode_traversal(t: &Traversal) -> Result<Vec<i32>, TryFromIntError> {
    let mut out = Vec::with_capacity(2 + 3 * t.len() + t.leaves.len());
    out.push(i32::try_from(t.len())?);
    for c in &t.visited {
        out.push(i32::try_from(c.row)?);
        out.push(i32::try_from(c.col)?);
    }
    for &p in &t.predecessors {
        out.push(i32::try_from(p)?);
    }
    out.push(i32::try_from(t.leaves.len())?);
    for &leaf in &t.leaves {
        out.push(i32::try_from(leaf)?);
    }
    Ok(out)
}

// ============================================================================
// Skeletonize
// ============================================================================

/// Thin a mask to a one-pixel-wide skeleton.
///
/// # Returns
/// Flat row-major bytes, 1 = skeleton, 0 = background
#[wasm_bindgen]
pub fn skeletonize_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let mask = mask_from_slice(data, width, height)?;
    let skeleton = morphology::skeletonize(mask.view())?;
    Ok(skeleton.iter().map(|&v| v as u8).collect())
}
