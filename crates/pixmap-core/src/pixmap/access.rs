//! Pixel access functions
//!
//! Bounds-checked accessors for single pixels, by (row, col) coordinates or
//! by flat index. All of them validate in every build profile; out-of-bounds
//! access is a checked error, never undefined behavior.

use super::Pixmap;
use crate::error::{Error, Result};
use crate::pixel::{CHANNELS, Pixel};

impl Pixmap {
    /// Byte offset of `(row, col)`, after validating the coordinates.
    #[inline]
    fn offset(&self, row: u32, col: u32) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(Error::OutOfRange {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok((row as usize * self.width as usize + col as usize) * CHANNELS)
    }

    /// Get the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `row >= height` or `col >= width`.
    pub fn get(&self, row: u32, col: u32) -> Result<Pixel> {
        let idx = self.offset(row, col)?;
        Ok(Pixel::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
        ))
    }

    /// Set the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `row >= height` or `col >= width`.
    pub fn set(&mut self, row: u32, col: u32, c: Pixel) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.data[idx] = c.r;
        self.data[idx + 1] = c.g;
        self.data[idx + 2] = c.b;
        Ok(())
    }

    /// Get the pixel at flat index `i`, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `i >= width * height`.
    pub fn get_at(&self, i: usize) -> Result<Pixel> {
        if i >= self.pixel_count() {
            return Err(Error::IndexOutOfRange {
                index: i,
                count: self.pixel_count(),
            });
        }
        let idx = i * CHANNELS;
        Ok(Pixel::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
        ))
    }

    /// Set the pixel at flat index `i`, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `i >= width * height`.
    pub fn set_at(&mut self, i: usize, c: Pixel) -> Result<()> {
        if i >= self.pixel_count() {
            return Err(Error::IndexOutOfRange {
                index: i,
                count: self.pixel_count(),
            });
        }
        let idx = i * CHANNELS;
        self.data[idx] = c.r;
        self.data[idx + 1] = c.g;
        self.data[idx + 2] = c.b;
        Ok(())
    }
}
