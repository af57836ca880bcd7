//! Pixmap - the RGB pixel buffer
//!
//! The `Pixmap` structure is the fundamental image type of this library.
//!
//! # Pixel layout
//!
//! - Storage is a flat byte vector of length `width * height * 3`
//! - Pixels are stored row-major: `(row, col)` lives at byte offset
//!   `(row * width + col) * 3`
//! - Within a pixel, bytes are ordered red, green, blue
//!
//! # Ownership model
//!
//! A `Pixmap` exclusively owns its storage. `Clone` performs a full deep
//! copy, so no two live pixmaps ever alias the same bytes; every producing
//! operator allocates a fresh output buffer and leaves its sources intact.

mod access;
mod arith;

use crate::error::{Error, Result};
use crate::pixel::{CHANNELS, Pixel};

/// An owned width x height RGB pixel buffer.
///
/// # Examples
///
/// ```
/// use pixmap_core::{Pixel, Pixmap};
///
/// let mut pm = Pixmap::new(4, 4);
/// pm.set(1, 2, Pixel::new(255, 0, 0)).unwrap();
/// assert_eq!(pm.get(1, 2).unwrap(), Pixel::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Raw RGB bytes, length `width * height * 3`
    data: Vec<u8>,
}

impl Pixmap {
    /// Create a zero-filled (black) pixmap. Either dimension may be 0.
    pub fn new(width: u32, height: u32) -> Pixmap {
        let len = width as usize * height as usize * CHANNELS;
        Pixmap {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Create a pixmap that takes ownership of existing raw RGB bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBufferSize`] if `data.len()` is not exactly
    /// `width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Pixmap> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::InvalidBufferSize {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Pixmap {
            width,
            height,
            data,
        })
    }

    /// Replace this pixmap's dimensions and storage wholesale.
    ///
    /// The old storage is discarded and `data` is deep-copied in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBufferSize`] if `data.len()` is not exactly
    /// `width * height * 3`; the pixmap is left unmodified in that case.
    pub fn set_data(&mut self, width: u32, height: u32, data: &[u8]) -> Result<()> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::InvalidBufferSize {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        self.width = width;
        self.height = height;
        self.data = data.to_vec();
        Ok(())
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total storage size in bytes (`width * height * 3`).
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Total number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the pixmap holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Raw backing bytes, for bulk operations such as codec hand-off.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw backing bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Fill the whole pixmap with one color, in place.
    pub fn fill(&mut self, c: Pixel) {
        for px in self.data.chunks_exact_mut(CHANNELS) {
            px[0] = c.r;
            px[1] = c.g;
            px[2] = c.b;
        }
    }
}
