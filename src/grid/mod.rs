//! Grid model shared by the labeler, the traverser and the thinning pass.
//!
//! - **Masks**: `ArrayView2<bool>` views in row-major `(row, col)` order,
//!   plus helpers that build owned masks from flat or row-wise buffers
//! - **Adjacency**: in-bounds neighbor enumeration under 4- or 8-connectivity

pub mod adjacency;
pub mod mask;

pub use adjacency::{Adjacency, Connectivity, Coord};
pub use mask::{mask_from_rows, mask_from_slice};
