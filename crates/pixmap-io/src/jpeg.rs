//! JPEG image format support
//!
//! Reads JPEG images using `jpeg-decoder` and writes them using
//! `jpeg-encoder`. As with PNG, every decoded pixel format is normalized to
//! 3-channel RGB.

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use pixmap_core::{CHANNELS, Pixmap};
use std::io::{Read, Write};

/// Default encoding quality (0-100).
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Read a JPEG image into a pixmap.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pixmap> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {e}")))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG frame info".to_string()))?;
    let width = info.width as u32;
    let height = info.height as u32;

    let rgb = match info.pixel_format {
        PixelFormat::RGB24 => pixels,
        PixelFormat::L8 => {
            let mut rgb = Vec::with_capacity(pixels.len() * CHANNELS);
            for v in pixels {
                rgb.extend_from_slice(&[v, v, v]);
            }
            rgb
        }
        PixelFormat::L16 => {
            // big-endian 16-bit luma, keep the high byte
            let mut rgb = Vec::with_capacity(pixels.len() / 2 * CHANNELS);
            for pair in pixels.chunks_exact(2) {
                rgb.extend_from_slice(&[pair[0], pair[0], pair[0]]);
            }
            rgb
        }
        PixelFormat::CMYK32 => {
            // jpeg-decoder yields Adobe-inverted CMYK
            let mut rgb = Vec::with_capacity(pixels.len() / 4 * CHANNELS);
            for px in pixels.chunks_exact(4) {
                let k = px[3] as u16;
                rgb.push((px[0] as u16 * k / 255) as u8);
                rgb.push((px[1] as u16 * k / 255) as u8);
                rgb.push((px[2] as u16 * k / 255) as u8);
            }
            rgb
        }
    };
    Ok(Pixmap::from_raw(width, height, rgb)?)
}

/// Write a pixmap as an RGB JPEG with the given quality (0-100).
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] for an empty pixmap, dimensions above
/// the JPEG limit of 65535, or an encoder failure.
pub fn write_jpeg<W: Write>(pm: &Pixmap, writer: W, quality: u8) -> IoResult<()> {
    if pm.is_empty() {
        return Err(IoError::EncodeError(
            "cannot encode an empty pixmap".to_string(),
        ));
    }
    if pm.width() > u16::MAX as u32 || pm.height() > u16::MAX as u32 {
        return Err(IoError::EncodeError(format!(
            "dimensions {}x{} exceed the JPEG limit",
            pm.width(),
            pm.height()
        )));
    }
    let encoder = jpeg_encoder::Encoder::new(writer, quality);
    encoder
        .encode(
            pm.data(),
            pm.width() as u16,
            pm.height() as u16,
            jpeg_encoder::ColorType::Rgb,
        )
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {e}")))?;
    Ok(())
}
