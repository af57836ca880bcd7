//! pixmap-filter - Convolution filters and block operators
//!
//! This crate provides image filtering operations including:
//!
//! - Convolution with arbitrary square kernels ([`convolve`])
//! - Blur operations (box blur, Gaussian blur)
//! - Sharpening and unsharp masking
//! - Edge detection (ridge kernel, Sobel operator)
//! - Glow (range extraction + blur + additive composite)
//! - Block aggregation (posterize mean, seeded color jitter)

mod block;
mod convolve;
mod edge;
mod enhance;
mod error;
mod kernel;

pub use block::{bitmap, color_jitter};
pub use convolve::{box_blur, convolve, gaussian_blur, identity};
pub use edge::{ridge_detection, sobel};
pub use enhance::{glow, sharpen, unsharp_masking};
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
