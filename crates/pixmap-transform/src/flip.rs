//! Flip, transpose, and orthogonal rotation
//!
//! All operations here are exact index permutations: no resampling loss,
//! and four successive [`rotate90`] calls reproduce the input bit for bit.

use pixmap_core::{CHANNELS, Pixmap};

/// Mirror across the horizontal midline: output row `i` is source row
/// `height - 1 - i`, columns unchanged.
///
/// The name follows the convention of flipping *across* the horizontal
/// axis, so visually the image turns upside down.
pub fn flip_horizontal(src: &Pixmap) -> Pixmap {
    let w = src.width() as usize;
    let h = src.height() as usize;
    let row_bytes = w * CHANNELS;
    let mut out = Pixmap::new(src.width(), src.height());
    for r in 0..h {
        let sr = h - 1 - r;
        out.data_mut()[r * row_bytes..(r + 1) * row_bytes]
            .copy_from_slice(&src.data()[sr * row_bytes..(sr + 1) * row_bytes]);
    }
    out
}

/// Mirror across the vertical midline: output column `j` is source column
/// `width - 1 - j`, rows unchanged.
pub fn flip_vertical(src: &Pixmap) -> Pixmap {
    let w = src.width() as usize;
    let h = src.height() as usize;
    let mut out = Pixmap::new(src.width(), src.height());
    for r in 0..h {
        for c in 0..w {
            let s = (r * w + c) * CHANNELS;
            let d = (r * w + (w - 1 - c)) * CHANNELS;
            out.data_mut()[d..d + CHANNELS].copy_from_slice(&src.data()[s..s + CHANNELS]);
        }
    }
    out
}

/// Transpose: output has swapped dimensions and `output(j, i) = input(i, j)`.
pub fn flip_positive_diagonal(src: &Pixmap) -> Pixmap {
    let w = src.width() as usize;
    let h = src.height() as usize;
    let mut out = Pixmap::new(src.height(), src.width());
    for r in 0..h {
        for c in 0..w {
            let s = (r * w + c) * CHANNELS;
            let d = (c * h + r) * CHANNELS;
            out.data_mut()[d..d + CHANNELS].copy_from_slice(&src.data()[s..s + CHANNELS]);
        }
    }
    out
}

/// Rotate 90 degrees clockwise: flip across the horizontal midline, then
/// transpose.
pub fn rotate90(src: &Pixmap) -> Pixmap {
    flip_positive_diagonal(&flip_horizontal(src))
}
