//! Edge detection: ridge kernel and the Sobel operator

use crate::convolve::{accumulate, convolve};
use crate::kernel::Kernel;
use pixmap_core::{CHANNELS, Pixmap};

/// 3x3 ridge (Laplacian-style) edge detection.
pub fn ridge_detection(src: &Pixmap) -> Pixmap {
    convolve(src, &Kernel::ridge_detection())
}

/// Sobel operator: gradient magnitude per channel.
///
/// Accumulates the horizontal and vertical gradient kernels without
/// intermediate clamping, then combines them as
/// `clamp(sqrt(g1^2 + g2^2), 0, 255)`. Clamping the gradients first would
/// discard all negative-going edges, so the raw sums are combined directly.
pub fn sobel(src: &Pixmap) -> Pixmap {
    let horizontal = Kernel::sobel_horizontal();
    let vertical = Kernel::sobel_vertical();
    let w = src.width() as usize;
    let mut out = Pixmap::new(src.width(), src.height());
    for r in 0..src.height() {
        for c in 0..src.width() {
            let g1 = accumulate(src, &horizontal, r, c);
            let g2 = accumulate(src, &vertical, r, c);
            let d = (r as usize * w + c as usize) * CHANNELS;
            for k in 0..CHANNELS {
                let magnitude = (g1[k] * g1[k] + g2[k] * g2[k]).sqrt();
                out.data_mut()[d + k] = magnitude.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    out
}
