//! Nearest-neighbor resampling

use crate::{TransformError, TransformResult};
use pixmap_core::Pixmap;

/// Map a destination index to a source index along one axis.
///
/// Destination position is normalized by `dst_len - 1` and rescaled to the
/// source extent, rounding to the nearest pixel. A destination extent of 1
/// has no normalization denominator, so every output pixel along that axis
/// samples source index 0.
#[inline]
fn sample_index(dst_i: u32, dst_len: u32, src_len: u32) -> u32 {
    if dst_len <= 1 {
        return 0;
    }
    let ratio = dst_i as f32 / (dst_len - 1) as f32;
    (ratio * (src_len - 1) as f32).round() as u32
}

/// Resize by nearest-neighbor sampling.
///
/// Each destination pixel `(i, j)` copies the source pixel nearest to its
/// normalized position. Either target dimension may be 0, producing an
/// empty pixmap.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] when asked to produce a
/// non-empty pixmap from an empty source.
pub fn resize(src: &Pixmap, new_w: u32, new_h: u32) -> TransformResult<Pixmap> {
    let mut out = Pixmap::new(new_w, new_h);
    if out.is_empty() {
        return Ok(out);
    }
    if src.is_empty() {
        return Err(TransformError::InvalidParameters(
            "cannot resize an empty pixmap to a non-empty one".to_string(),
        ));
    }

    for i in 0..new_h {
        let src_row = sample_index(i, new_h, src.height());
        for j in 0..new_w {
            let src_col = sample_index(j, new_w, src.width());
            let px = src.get(src_row, src_col).map_err(TransformError::Core)?;
            out.set(i, j, px).map_err(TransformError::Core)?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixmap_core::Pixel;

    fn gradient(w: u32, h: u32) -> Pixmap {
        let mut pm = Pixmap::new(w, h);
        for r in 0..h {
            for c in 0..w {
                pm.set(r, c, Pixel::new((r * 10) as u8, (c * 10) as u8, 0))
                    .unwrap();
            }
        }
        pm
    }

    #[test]
    fn test_resize_identity() {
        let src = gradient(4, 3);
        let out = resize(&src, 4, 3).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_resize_upscale_corners_preserved() {
        let src = gradient(2, 2);
        let out = resize(&src, 5, 5).unwrap();
        assert_eq!(out.get(0, 0).unwrap(), src.get(0, 0).unwrap());
        assert_eq!(out.get(0, 4).unwrap(), src.get(0, 1).unwrap());
        assert_eq!(out.get(4, 0).unwrap(), src.get(1, 0).unwrap());
        assert_eq!(out.get(4, 4).unwrap(), src.get(1, 1).unwrap());
    }

    #[test]
    fn test_resize_to_single_pixel_samples_origin() {
        let src = gradient(5, 5);
        let out = resize(&src, 1, 1).unwrap();
        assert_eq!(out.get(0, 0).unwrap(), src.get(0, 0).unwrap());
    }

    #[test]
    fn test_resize_single_column_samples_first_column() {
        let src = gradient(5, 3);
        let out = resize(&src, 1, 3).unwrap();
        for r in 0..3 {
            assert_eq!(out.get(r, 0).unwrap(), src.get(r, 0).unwrap());
        }
    }

    #[test]
    fn test_resize_to_empty() {
        let src = gradient(3, 3);
        let out = resize(&src, 0, 7).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.width(), 0);
        assert_eq!(out.height(), 7);
    }

    #[test]
    fn test_resize_empty_source_fails() {
        let src = Pixmap::new(0, 0);
        assert!(resize(&src, 2, 2).is_err());
    }
}
