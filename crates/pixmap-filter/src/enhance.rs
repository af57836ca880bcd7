//! Image enhancement: sharpening, unsharp masking, glow

use crate::convolve::{box_blur, convolve};
use crate::kernel::Kernel;
use crate::FilterResult;
use pixmap_color::extract;
use pixmap_core::{Pixel, Pixmap};

/// 3x3 sharpening filter.
pub fn sharpen(src: &Pixmap) -> Pixmap {
    convolve(src, &Kernel::sharpen())
}

/// 5x5 unsharp masking filter.
pub fn unsharp_masking(src: &Pixmap) -> Pixmap {
    convolve(src, &Kernel::unsharp_masking())
}

/// Glow effect: pixels within the `[low, high]` color range are extracted,
/// box-blurred, and added back onto the source with saturation.
///
/// # Errors
///
/// Returns a core error if the intermediate composite fails; the
/// intermediate always matches the source size, so this does not happen in
/// practice.
pub fn glow(src: &Pixmap, low: Pixel, high: Pixel) -> FilterResult<Pixmap> {
    let halo = box_blur(&extract(src, low, high));
    Ok(src.add(&halo)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharpen_uniform_image_unchanged() {
        let mut src = Pixmap::new(4, 4);
        src.fill(Pixel::new(90, 91, 92));
        assert_eq!(sharpen(&src), src);
    }

    #[test]
    fn test_sharpen_boosts_center_of_bright_spot() {
        let mut src = Pixmap::new(3, 3);
        src.fill(Pixel::new(100, 100, 100));
        src.set(1, 1, Pixel::new(120, 120, 120)).unwrap();
        let out = sharpen(&src);
        // 5*120 - 4*100 = 200
        assert_eq!(out.get(1, 1).unwrap(), Pixel::new(200, 200, 200));
    }

    #[test]
    fn test_unsharp_masking_uniform_image_unchanged() {
        // kernel weights sum to -256, scale -1/256, so flat regions pass
        // through exactly
        let mut src = Pixmap::new(5, 5);
        src.fill(Pixel::new(64, 128, 192));
        assert_eq!(unsharp_masking(&src), src);
    }

    #[test]
    fn test_glow_leaves_out_of_range_untouched() {
        let mut src = Pixmap::new(3, 3);
        src.fill(Pixel::new(10, 10, 10));
        let out = glow(&src, Pixel::new(100, 100, 100), Pixel::WHITE).unwrap();
        // nothing extracted: halo is black, add is identity
        assert_eq!(out, src);
    }

    #[test]
    fn test_glow_brightens_extracted_pixels() {
        let mut src = Pixmap::new(3, 3);
        src.fill(Pixel::new(200, 200, 200));
        let out = glow(&src, Pixel::new(100, 100, 100), Pixel::WHITE).unwrap();
        // every pixel extracted and blurred back to 200, then added: saturates
        assert_eq!(out.get(1, 1).unwrap(), Pixel::WHITE);
    }
}
