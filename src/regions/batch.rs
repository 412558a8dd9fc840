//! Batch entry points.
//!
//! Each element runs as its own independent call on the rayon pool. A single
//! flood or traversal is never split across threads; results keep input order.

use ndarray::ArrayView2;
use rayon::prelude::*;

use crate::error::GridResult;
use crate::grid::{Connectivity, Coord};

use super::dfs::{traverse, Traversal};
use super::label::{label, Labeling};

/// Traverse from several seeds over the same read-only mask.
///
/// Fails with the error of the first failing seed in input order.
pub fn traverse_many(
    mask: ArrayView2<bool>,
    seeds: &[Coord],
    connectivity: Connectivity,
) -> GridResult<Vec<Traversal>> {
    let results: Vec<GridResult<Traversal>> = seeds
        .par_iter()
        .map(|&seed| traverse(mask, seed, connectivity))
        .collect();
    results.into_iter().collect()
}

/// Label several independent masks.
///
/// Fails with the error of the first failing mask in input order.
pub fn label_many(
    masks: &[ArrayView2<bool>],
    connectivity: Connectivity,
) -> GridResult<Vec<Labeling>> {
    let results: Vec<GridResult<Labeling>> = masks
        .par_iter()
        .map(|mask| label(*mask, connectivity))
        .collect();
    results.into_iter().collect()
}
