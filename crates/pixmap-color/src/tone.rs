//! Tone operators: grayscale, invert, gamma correction

use crate::{ColorError, ColorResult};
use pixmap_core::{CHANNELS, Pixmap};

/// Luma weights for grayscale conversion (ITU-R 601-ish, as used by the
/// classic 0.3/0.59/0.11 formula).
const LUMA_WEIGHTS: [f32; CHANNELS] = [0.3, 0.59, 0.11];

/// Convert to grayscale: every channel of the output pixel is the weighted
/// intensity `0.3*r + 0.59*g + 0.11*b`, truncated to a byte.
///
/// Truncation is deliberate: pure red (255, 0, 0) maps to intensity 76.
pub fn grayscale(src: &Pixmap) -> Pixmap {
    let mut out = Pixmap::new(src.width(), src.height());
    for (o, px) in out
        .data_mut()
        .chunks_exact_mut(CHANNELS)
        .zip(src.data().chunks_exact(CHANNELS))
    {
        let intensity = (px[0] as f32 * LUMA_WEIGHTS[0]
            + px[1] as f32 * LUMA_WEIGHTS[1]
            + px[2] as f32 * LUMA_WEIGHTS[2]) as u8;
        o.fill(intensity);
    }
    out
}

/// Photographic negative: every channel becomes `255 - value`.
pub fn invert(src: &Pixmap) -> Pixmap {
    let mut out = Pixmap::new(src.width(), src.height());
    for (o, &v) in out.data_mut().iter_mut().zip(src.data()) {
        *o = 255 - v;
    }
    out
}

/// Gamma correction: each channel is normalized to [0, 1], raised to the
/// power `1/gamma`, and rescaled to [0, 255] with rounding.
///
/// `gamma < 1` darkens the image, `gamma > 1` brightens it.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if `gamma` is not a positive
/// finite number.
pub fn gamma_correct(src: &Pixmap, gamma: f32) -> ColorResult<Pixmap> {
    if !(gamma.is_finite() && gamma > 0.0) {
        return Err(ColorError::InvalidParameters(format!(
            "gamma must be positive and finite, got {gamma}"
        )));
    }
    let exponent = 1.0 / gamma;
    let mut out = Pixmap::new(src.width(), src.height());
    for (o, &v) in out.data_mut().iter_mut().zip(src.data()) {
        let normalized = v as f32 / 255.0;
        *o = (normalized.powf(exponent) * 255.0).round() as u8;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixmap_core::Pixel;

    #[test]
    fn test_grayscale_pure_red() {
        let src = Pixmap::from_raw(1, 1, vec![255, 0, 0]).unwrap();
        let out = grayscale(&src);
        // 255 * 0.3 = 76.5, truncated
        assert_eq!(out.get_at(0).unwrap(), Pixel::new(76, 76, 76));
    }

    #[test]
    fn test_grayscale_white_stays_white() {
        let src = Pixmap::from_raw(1, 1, vec![255, 255, 255]).unwrap();
        let out = grayscale(&src);
        assert_eq!(out.get_at(0).unwrap(), Pixel::new(255, 255, 255));
    }

    #[test]
    fn test_invert_is_involution() {
        let src = Pixmap::from_raw(2, 1, vec![0, 128, 255, 13, 57, 200]).unwrap();
        assert_eq!(invert(&invert(&src)), src);
    }

    #[test]
    fn test_invert_values() {
        let src = Pixmap::from_raw(1, 1, vec![0, 100, 255]).unwrap();
        assert_eq!(invert(&src).get_at(0).unwrap(), Pixel::new(255, 155, 0));
    }

    #[test]
    fn test_gamma_one_is_identity() {
        let src = Pixmap::from_raw(2, 1, vec![0, 64, 128, 192, 255, 10]).unwrap();
        assert_eq!(gamma_correct(&src, 1.0).unwrap(), src);
    }

    #[test]
    fn test_gamma_fixes_endpoints() {
        let src = Pixmap::from_raw(1, 1, vec![0, 255, 128]).unwrap();
        let out = gamma_correct(&src, 2.2).unwrap();
        assert_eq!(out.data()[0], 0);
        assert_eq!(out.data()[1], 255);
        // (128/255)^(1/2.2) * 255 ~ 186
        assert_eq!(out.data()[2], 186);
    }

    #[test]
    fn test_gamma_rejects_non_positive() {
        let src = Pixmap::new(1, 1);
        assert!(gamma_correct(&src, 0.0).is_err());
        assert!(gamma_correct(&src, -1.0).is_err());
        assert!(gamma_correct(&src, f32::NAN).is_err());
    }
}
