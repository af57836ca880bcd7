//! pixmap-io - Image codecs for the pixmap library
//!
//! The codec adapter between [`pixmap_core::Pixmap`] and on-disk image
//! files. Formats are detected by magic number on read and chosen by the
//! caller (or by file extension) on write. Every decode path normalizes to
//! the 3-channel RGB model; a failed decode produces no pixmap at all, so
//! callers never observe partial state.

mod error;
mod format;
pub mod jpeg;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use jpeg::DEFAULT_JPEG_QUALITY;

use pixmap_core::Pixmap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read an image from a file, detecting the format from its magic number.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pixmap> {
    let format = detect_format(&path)?;
    let reader = BufReader::new(File::open(&path)?);
    match format {
        ImageFormat::Png => png::read_png(reader),
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(pm: &Pixmap, path: P, format: ImageFormat) -> IoResult<()> {
    let writer = BufWriter::new(File::create(&path)?);
    match format {
        ImageFormat::Png => png::write_png(pm, writer),
        ImageFormat::Jpeg => jpeg::write_jpeg(pm, writer, DEFAULT_JPEG_QUALITY),
    }
}

/// Write an image to a file, choosing the format from the file extension.
pub fn write_image_auto<P: AsRef<Path>>(pm: &Pixmap, path: P) -> IoResult<()> {
    let format = ImageFormat::from_extension(&path)?;
    write_image(pm, path, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixmap_core::Pixel;

    #[test]
    fn test_file_round_trip_with_detection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let mut pm = Pixmap::new(4, 4);
        pm.fill(Pixel::new(1, 2, 3));
        pm.set(2, 3, Pixel::new(200, 100, 50)).unwrap();

        write_image_auto(&pm, &path).unwrap();
        let back = read_image(&path).unwrap();
        assert_eq!(back, pm);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_image(dir.path().join("nope.png")),
            Err(IoError::Io(_))
        ));
    }

    #[test]
    fn test_detection_ignores_extension() {
        // a PNG stored with a .jpg name still reads as PNG
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mislabeled.jpg");

        let mut pm = Pixmap::new(2, 2);
        pm.fill(Pixel::new(9, 9, 9));
        write_image(&pm, &path, ImageFormat::Png).unwrap();

        assert_eq!(detect_format(&path).unwrap(), ImageFormat::Png);
        assert_eq!(read_image(&path).unwrap(), pm);
    }

    #[test]
    fn test_write_auto_unknown_extension_fails() {
        let pm = Pixmap::new(1, 1);
        assert!(matches!(
            write_image_auto(&pm, "image.bmp"),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
