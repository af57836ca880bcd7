//! Subimage extraction, region paste, and grid tiling

use crate::{TransformError, TransformResult};
use pixmap_core::{CHANNELS, Pixmap};

/// Extract a `w x h` rectangle whose top-left corner is at column `x`,
/// row `y`.
///
/// The rectangle may touch the source edge: `x + w == width` and
/// `y + h == height` are both valid, so `subimage(src, 0, 0, width, height)`
/// returns a full copy.
///
/// # Errors
///
/// Returns [`TransformError::RegionOutOfRange`] if `x + w > width` or
/// `y + h > height`.
pub fn subimage(src: &Pixmap, x: u32, y: u32, w: u32, h: u32) -> TransformResult<Pixmap> {
    if x as u64 + w as u64 > src.width() as u64 || y as u64 + h as u64 > src.height() as u64 {
        return Err(TransformError::RegionOutOfRange {
            x,
            y,
            w,
            h,
            width: src.width(),
            height: src.height(),
        });
    }

    let src_row_bytes = src.width() as usize * CHANNELS;
    let out_row_bytes = w as usize * CHANNELS;
    let mut out = Pixmap::new(w, h);
    for i in 0..h as usize {
        let s = (y as usize + i) * src_row_bytes + x as usize * CHANNELS;
        out.data_mut()[i * out_row_bytes..(i + 1) * out_row_bytes]
            .copy_from_slice(&src.data()[s..s + out_row_bytes]);
    }
    Ok(out)
}

/// Clipped overlap of `src` pasted into `dst` at column `x`, row `y`.
///
/// Returns (rows, cols) of the overlapping region, either of which may be 0.
#[inline]
fn overlap(dst: &Pixmap, src: &Pixmap, x: u32, y: u32) -> (usize, usize) {
    let copy_h = (src.height() as usize).min((dst.height() as usize).saturating_sub(y as usize));
    let copy_w = (src.width() as usize).min((dst.width() as usize).saturating_sub(x as usize));
    (copy_h, copy_w)
}

/// Paste `src` into `dst` at column `x`, row `y`, in place.
///
/// Any portion of `src` falling outside `dst` is silently clipped.
pub fn replace(dst: &mut Pixmap, src: &Pixmap, x: u32, y: u32) {
    let (copy_h, copy_w) = overlap(dst, src, x, y);
    if copy_w == 0 {
        return;
    }
    let src_row_bytes = src.width() as usize * CHANNELS;
    let dst_row_bytes = dst.width() as usize * CHANNELS;
    let copy_bytes = copy_w * CHANNELS;
    for i in 0..copy_h {
        let s = i * src_row_bytes;
        let d = (y as usize + i) * dst_row_bytes + x as usize * CHANNELS;
        dst.data_mut()[d..d + copy_bytes].copy_from_slice(&src.data()[s..s + copy_bytes]);
    }
}

/// Alpha-blend `src` into `dst` at column `x`, row `y`, in place.
///
/// Each destination pixel in the overlap becomes
/// `dst * (1 - alpha) + src * alpha`, per channel; the overhang is clipped
/// exactly as in [`replace`].
pub fn replace_alpha(dst: &mut Pixmap, src: &Pixmap, alpha: f32, x: u32, y: u32) {
    let (copy_h, copy_w) = overlap(dst, src, x, y);
    let src_row = src.width() as usize;
    let dst_row = dst.width() as usize;
    for i in 0..copy_h {
        for j in 0..copy_w {
            let s = (i * src_row + j) * CHANNELS;
            let d = ((y as usize + i) * dst_row + x as usize + j) * CHANNELS;
            for k in 0..CHANNELS {
                let dv = dst.data()[d + k] as f32;
                let sv = src.data()[s + k] as f32;
                dst.data_mut()[d + k] = (dv * (1.0 - alpha) + sv * alpha).clamp(0.0, 255.0) as u8;
            }
        }
    }
}

/// Tile `src` into an `(width * n) x (height * m)` grid: `n` copies across,
/// `m` copies down, repeating the source row bytes.
pub fn grid_copy(src: &Pixmap, m: u32, n: u32) -> Pixmap {
    let h = src.height() as usize;
    let row_bytes = src.width() as usize * CHANNELS;
    let out_row_bytes = row_bytes * n as usize;
    let mut out = Pixmap::new(src.width() * n, src.height() * m);
    for tile in 0..m as usize {
        for r in 0..h {
            let src_row = &src.data()[r * row_bytes..(r + 1) * row_bytes];
            let base = (tile * h + r) * out_row_bytes;
            for t in 0..n as usize {
                let d = base + t * row_bytes;
                out.data_mut()[d..d + row_bytes].copy_from_slice(src_row);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixmap_core::Pixel;

    fn numbered(w: u32, h: u32) -> Pixmap {
        let mut pm = Pixmap::new(w, h);
        for i in 0..pm.pixel_count() {
            pm.set_at(i, Pixel::new(i as u8, 0, 0)).unwrap();
        }
        pm
    }

    #[test]
    fn test_subimage_interior() {
        let src = numbered(4, 4);
        let sub = subimage(&src, 1, 2, 2, 2).unwrap();
        assert_eq!((sub.width(), sub.height()), (2, 2));
        assert_eq!(sub.get(0, 0).unwrap(), src.get(2, 1).unwrap());
        assert_eq!(sub.get(1, 1).unwrap(), src.get(3, 2).unwrap());
    }

    #[test]
    fn test_subimage_full_extent_is_copy() {
        let src = numbered(3, 5);
        let sub = subimage(&src, 0, 0, 3, 5).unwrap();
        assert_eq!(sub, src);
    }

    #[test]
    fn test_subimage_touching_edge() {
        let src = numbered(4, 4);
        let sub = subimage(&src, 2, 2, 2, 2).unwrap();
        assert_eq!(sub.get(1, 1).unwrap(), src.get(3, 3).unwrap());
    }

    #[test]
    fn test_subimage_out_of_range() {
        let src = numbered(4, 4);
        assert!(matches!(
            subimage(&src, 2, 0, 3, 2),
            Err(TransformError::RegionOutOfRange { .. })
        ));
        assert!(subimage(&src, 0, 3, 2, 2).is_err());
    }

    #[test]
    fn test_replace_interior() {
        let mut dst = Pixmap::new(4, 4);
        let mut src = Pixmap::new(2, 2);
        src.fill(Pixel::new(5, 6, 7));
        replace(&mut dst, &src, 1, 1);
        assert_eq!(dst.get(1, 1).unwrap(), Pixel::new(5, 6, 7));
        assert_eq!(dst.get(2, 2).unwrap(), Pixel::new(5, 6, 7));
        assert_eq!(dst.get(0, 0).unwrap(), Pixel::BLACK);
        assert_eq!(dst.get(3, 3).unwrap(), Pixel::BLACK);
    }

    #[test]
    fn test_replace_clips_overhang() {
        let mut dst = Pixmap::new(3, 3);
        let mut src = Pixmap::new(3, 3);
        src.fill(Pixel::WHITE);
        replace(&mut dst, &src, 2, 2);
        // only the bottom-right pixel overlaps
        assert_eq!(dst.get(2, 2).unwrap(), Pixel::WHITE);
        assert_eq!(dst.get(2, 1).unwrap(), Pixel::BLACK);
        assert_eq!(dst.get(1, 2).unwrap(), Pixel::BLACK);
    }

    #[test]
    fn test_replace_fully_outside_is_noop() {
        let mut dst = Pixmap::new(2, 2);
        let mut src = Pixmap::new(2, 2);
        src.fill(Pixel::WHITE);
        let before = dst.clone();
        replace(&mut dst, &src, 5, 0);
        assert_eq!(dst, before);
    }

    #[test]
    fn test_replace_alpha_blends_overlap() {
        let mut dst = Pixmap::new(2, 2);
        dst.fill(Pixel::new(100, 100, 100));
        let mut src = Pixmap::new(2, 2);
        src.fill(Pixel::new(200, 200, 200));
        replace_alpha(&mut dst, &src, 0.5, 1, 0);
        // blended column
        assert_eq!(dst.get(0, 1).unwrap(), Pixel::new(150, 150, 150));
        // untouched column
        assert_eq!(dst.get(0, 0).unwrap(), Pixel::new(100, 100, 100));
    }

    #[test]
    fn test_grid_copy_dimensions_and_tiles() {
        let src = numbered(2, 3);
        let out = grid_copy(&src, 2, 4);
        assert_eq!((out.width(), out.height()), (8, 6));
        for tr in 0..2u32 {
            for tc in 0..4u32 {
                for r in 0..3u32 {
                    for c in 0..2u32 {
                        assert_eq!(
                            out.get(tr * 3 + r, tc * 2 + c).unwrap(),
                            src.get(r, c).unwrap()
                        );
                    }
                }
            }
        }
    }
}
