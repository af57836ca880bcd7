//! Block aggregation: posterize-style averaging and per-block color jitter
//!
//! Both operators tile the pixmap into `size x size` blocks; the final row
//! and column of blocks are clamped to the remaining extent when the
//! dimensions do not divide evenly.

use crate::{FilterError, FilterResult};
use pixmap_core::{CHANNELS, Pixmap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Maximum magnitude of a per-block channel offset in [`color_jitter`].
const JITTER_RANGE: i32 = 40;

/// Iterate the blocks of a `w x h` grid, calling `f` with each block's
/// top-left corner and clamped extent.
fn for_each_block(w: usize, h: usize, size: usize, mut f: impl FnMut(usize, usize, usize, usize)) {
    for by in (0..h).step_by(size) {
        for bx in (0..w).step_by(size) {
            let bw = size.min(w - bx);
            let bh = size.min(h - by);
            f(by, bx, bh, bw);
        }
    }
}

/// Posterize: fill every `size x size` block with its per-channel arithmetic
/// mean color.
///
/// With `size >= max(width, height)` the whole image becomes one block and
/// the result is a uniform mean color.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `size` is 0.
pub fn bitmap(src: &Pixmap, size: u32) -> FilterResult<Pixmap> {
    if size == 0 {
        return Err(FilterError::InvalidParameters(
            "block size must be positive".to_string(),
        ));
    }
    let w = src.width() as usize;
    let h = src.height() as usize;
    let mut out = Pixmap::new(src.width(), src.height());

    for_each_block(w, h, size as usize, |by, bx, bh, bw| {
        let mut sums = [0u64; CHANNELS];
        for r in by..by + bh {
            for c in bx..bx + bw {
                let s = (r * w + c) * CHANNELS;
                for (k, sum) in sums.iter_mut().enumerate() {
                    *sum += src.data()[s + k] as u64;
                }
            }
        }
        let count = (bh * bw) as u64;
        let mean: [u8; CHANNELS] = sums.map(|s| (s / count) as u8);
        for r in by..by + bh {
            for c in bx..bx + bw {
                let d = (r * w + c) * CHANNELS;
                out.data_mut()[d..d + CHANNELS].copy_from_slice(&mean);
            }
        }
    });
    Ok(out)
}

/// Color jitter: add one random per-channel offset in
/// `[-JITTER_RANGE, JITTER_RANGE]` to every pixel of each block, clamping to
/// [0, 255].
///
/// Passing `Some(seed)` makes the jitter fully reproducible; `None` seeds
/// from the operating system.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `size` is 0.
pub fn color_jitter(src: &Pixmap, size: u32, seed: Option<u64>) -> FilterResult<Pixmap> {
    if size == 0 {
        return Err(FilterError::InvalidParameters(
            "block size must be positive".to_string(),
        ));
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let w = src.width() as usize;
    let h = src.height() as usize;
    let mut out = Pixmap::new(src.width(), src.height());

    for_each_block(w, h, size as usize, |by, bx, bh, bw| {
        let offsets: [i32; CHANNELS] =
            std::array::from_fn(|_| rng.random_range(-JITTER_RANGE..=JITTER_RANGE));
        for r in by..by + bh {
            for c in bx..bx + bw {
                let i = (r * w + c) * CHANNELS;
                for (k, &off) in offsets.iter().enumerate() {
                    let v = src.data()[i + k] as i32 + off;
                    out.data_mut()[i + k] = v.clamp(0, 255) as u8;
                }
            }
        }
    });
    Ok(out)
}
