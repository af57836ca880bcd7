//! pixmap-core - Core data structures for the pixmap image library
//!
//! This crate provides the fundamental types shared by every other crate in
//! the workspace:
//!
//! - [`Pixmap`]: an owned, flat RGB byte buffer with checked pixel access
//! - [`Pixel`] and [`Channel`]: the 8-bit three-channel color model
//! - Pixel-wise arithmetic compositing between equal-sized pixmaps
//! - [`Error`]: the core error taxonomy (out-of-range access, dimension
//!   mismatch, invalid buffer size)

mod error;
mod pixel;
mod pixmap;

pub use error::{Error, Result};
pub use pixel::{CHANNELS, Channel, Pixel};
pub use pixmap::Pixmap;
