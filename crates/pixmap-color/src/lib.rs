//! pixmap-color - Tone and channel operators for the pixmap library
//!
//! Per-pixel, single-buffer transforms:
//!
//! - **Tone** ([`tone`]): grayscale, invert, gamma correction
//! - **Channels** ([`channel`]): swirl (cyclic channel permutation), color
//!   range extraction, single-channel extraction

pub mod channel;
mod error;
pub mod tone;

pub use channel::{extract, extract_blue, extract_channel, extract_green, extract_red, swirl};
pub use error::{ColorError, ColorResult};
pub use tone::{gamma_correct, grayscale, invert};
