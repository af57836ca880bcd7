//! Convolution engine
//!
//! Applies a square [`Kernel`] to a pixmap using true convolution (the
//! kernel is spatially flipped, not correlated) with clamp-to-edge boundary
//! sampling: out-of-range sample coordinates snap to the nearest valid edge
//! pixel. All derived filters and the Sobel operator share the single
//! accumulation routine here, so the boundary policy lives in one place.

use crate::kernel::Kernel;
use pixmap_core::{CHANNELS, Pixmap};

/// Scaled, per-channel weighted sum of the kernel neighborhood around
/// `(row, col)`, unclamped.
///
/// The kernel is indexed mirrored (`(n-1-ki, n-1-kj)`), making this a true
/// convolution; sample coordinates are clamped to the edge.
pub(crate) fn accumulate(src: &Pixmap, kernel: &Kernel, row: u32, col: u32) -> [f32; CHANNELS] {
    let n = kernel.side() as i64;
    let center = n / 2;
    let w = src.width() as i64;
    let h = src.height() as i64;
    let mut sums = [0.0f32; CHANNELS];

    for ki in 0..n {
        for kj in 0..n {
            let sr = (row as i64 + ki - center).clamp(0, h - 1) as usize;
            let sc = (col as i64 + kj - center).clamp(0, w - 1) as usize;
            let weight = kernel.get((n - 1 - ki) as usize, (n - 1 - kj) as usize) as f32;
            let s = (sr * w as usize + sc) * CHANNELS;
            for (k, sum) in sums.iter_mut().enumerate() {
                *sum += weight * src.data()[s + k] as f32;
            }
        }
    }
    for sum in &mut sums {
        *sum *= kernel.scale();
    }
    sums
}

/// Convolve a pixmap with a kernel.
///
/// Each output channel is the scaled weighted sum rounded and clamped to
/// [0, 255].
pub fn convolve(src: &Pixmap, kernel: &Kernel) -> Pixmap {
    let mut out = Pixmap::new(src.width(), src.height());
    let w = src.width() as usize;
    for r in 0..src.height() {
        for c in 0..src.width() {
            let sums = accumulate(src, kernel, r, c);
            let d = (r as usize * w + c as usize) * CHANNELS;
            for (k, sum) in sums.iter().enumerate() {
                out.data_mut()[d + k] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    out
}

/// Convolve with the identity kernel; reproduces the input.
pub fn identity(src: &Pixmap) -> Pixmap {
    convolve(src, &Kernel::identity())
}

/// 3x3 Gaussian blur.
pub fn gaussian_blur(src: &Pixmap) -> Pixmap {
    convolve(src, &Kernel::gaussian_blur())
}

/// 3x3 box blur.
pub fn box_blur(src: &Pixmap) -> Pixmap {
    convolve(src, &Kernel::box_blur())
}
