//! Region algorithms over binary masks.
//!
//! - **Labeling**: one flood per connected region, labels in row-major discovery order
//! - **Traversal**: seeded depth-first search producing a spanning tree and its leaves
//! - **Batch**: independent labeling/traversal calls spread over a rayon pool

pub mod batch;
pub mod dfs;
pub mod label;

pub use batch::{label_many, traverse_many};
pub use dfs::{traverse, Traversal, ROOT_PREDECESSOR};
pub use label::{label, Labeling};
