//! pixmap - In-memory RGB raster image engine
//!
//! A pixel buffer abstraction plus a library of transform, compositing,
//! convolution, tone, and block operators applied to it:
//!
//! - Core buffer and arithmetic compositing ([`Pixmap`], [`Pixel`])
//! - Geometric transforms ([`transform`]): resize, flips, rotation,
//!   subimage, paste, tiling
//! - Convolution filters and block aggregation ([`filter`]): blurs,
//!   sharpening, edge detection, Sobel, glow, posterize, color jitter
//! - Tone and channel operators ([`color`]): grayscale, invert, gamma,
//!   swirl, channel extraction
//! - PNG/JPEG codecs ([`io`])
//!
//! # Example
//!
//! ```
//! use pixmap::{Pixel, Pixmap};
//!
//! let mut pm = Pixmap::new(64, 64);
//! pm.fill(Pixel::new(30, 60, 90));
//! let rotated = pixmap::transform::rotate90(&pm);
//! let blurred = pixmap::filter::gaussian_blur(&rotated);
//! assert_eq!(blurred.width(), 64);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixmap_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixmap_color as color;
pub use pixmap_filter as filter;
pub use pixmap_io as io;
pub use pixmap_transform as transform;
