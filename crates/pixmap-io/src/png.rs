//! PNG image format support
//!
//! Decoding normalizes every PNG color type to the 3-channel RGB model:
//! palettes are expanded, 16-bit samples are stripped to 8, grayscale is
//! replicated across channels, and alpha is dropped. Encoding always writes
//! 8-bit RGB.

use crate::{IoError, IoResult};
use pixmap_core::{CHANNELS, Pixmap};
use png::{ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into a pixmap.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pixmap> {
    let mut decoder = Decoder::new(reader);
    // palette -> RGB, sub-byte gray -> 8-bit, 16-bit -> 8-bit
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {e}")))?;

    let width = info.width;
    let height = info.height;
    let samples = match info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            // EXPAND converts indexed images to RGB before this point
            return Err(IoError::DecodeError(
                "indexed PNG not expanded by decoder".to_string(),
            ));
        }
    };

    let data = &buf[..info.buffer_size()];
    let mut rgb = Vec::with_capacity(width as usize * height as usize * CHANNELS);
    for y in 0..height as usize {
        let row = &data[y * info.line_size..];
        for x in 0..width as usize {
            let px = &row[x * samples..];
            match samples {
                1 | 2 => rgb.extend_from_slice(&[px[0], px[0], px[0]]),
                _ => rgb.extend_from_slice(&px[..CHANNELS]),
            }
        }
    }
    Ok(Pixmap::from_raw(width, height, rgb)?)
}

/// Write a pixmap as an 8-bit RGB PNG.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] for an empty pixmap (PNG has no
/// zero-dimension images) or an encoder failure.
pub fn write_png<W: Write>(pm: &Pixmap, writer: W) -> IoResult<()> {
    if pm.is_empty() {
        return Err(IoError::EncodeError(
            "cannot encode an empty pixmap".to_string(),
        ));
    }
    let mut encoder = Encoder::new(writer, pm.width(), pm.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {e}")))?;
    writer
        .write_image_data(pm.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixmap_core::Pixel;
    use std::io::Cursor;

    fn round_trip(pm: &Pixmap) -> Pixmap {
        let mut encoded = Vec::new();
        write_png(pm, &mut encoded).unwrap();
        read_png(Cursor::new(encoded)).unwrap()
    }

    #[test]
    fn test_png_round_trip_exact() {
        let mut pm = Pixmap::new(5, 3);
        for i in 0..pm.pixel_count() {
            pm.set_at(i, Pixel::new(i as u8, (i * 7) as u8, 255 - i as u8))
                .unwrap();
        }
        assert_eq!(round_trip(&pm), pm);
    }

    #[test]
    fn test_png_single_pixel() {
        let pm = Pixmap::from_raw(1, 1, vec![12, 34, 56]).unwrap();
        assert_eq!(round_trip(&pm), pm);
    }

    #[test]
    fn test_write_empty_fails() {
        let pm = Pixmap::new(0, 0);
        let mut sink = Vec::new();
        assert!(matches!(
            write_png(&pm, &mut sink),
            Err(IoError::EncodeError(_))
        ));
    }

    #[test]
    fn test_read_garbage_fails() {
        let out = read_png(Cursor::new(b"not a png at all".to_vec()));
        assert!(matches!(out, Err(IoError::DecodeError(_))));
    }
}
