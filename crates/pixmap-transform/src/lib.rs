//! pixmap-transform - Geometric transformations for the pixmap library
//!
//! This crate provides pure index-remapping operations:
//!
//! - Nearest-neighbor resizing
//! - Horizontal/vertical flips, transpose, and 90-degree rotation
//! - Subimage extraction and region paste (plain and alpha-blended)
//! - Grid tiling
//!
//! Every producing operation allocates a new [`pixmap_core::Pixmap`];
//! only [`replace`] and [`replace_alpha`] mutate their destination.

mod crop;
mod error;
mod flip;
mod resize;

pub use crop::{grid_copy, replace, replace_alpha, subimage};
pub use error::{TransformError, TransformResult};
pub use flip::{flip_horizontal, flip_positive_diagonal, flip_vertical, rotate90};
pub use resize::resize;
