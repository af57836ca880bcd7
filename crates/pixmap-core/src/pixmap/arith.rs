//! Pixel-wise arithmetic compositing
//!
//! Binary elementwise operators over two pixmaps of identical dimensions:
//!
//! - Saturating addition and subtraction (`add`, `subtract`)
//! - Saturating multiplication (`multiply`)
//! - Absolute difference (`difference`)
//! - Per-channel min and max (`darkest`, `lightest`)
//! - Linear interpolation (`alpha_blend`)
//!
//! All operators validate that the operands share dimensions and return a
//! newly allocated pixmap; neither source is mutated.

use super::Pixmap;
use crate::error::{Error, Result};

/// Per-channel combination rule used by the compositing operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompositeOp {
    Add,
    Subtract,
    Multiply,
    Difference,
    Lightest,
    Darkest,
}

impl CompositeOp {
    #[inline]
    fn apply(self, a: u8, b: u8) -> u8 {
        match self {
            CompositeOp::Add => a.saturating_add(b),
            CompositeOp::Subtract => a.saturating_sub(b),
            // widest product is 255 * 255 = 65025, which fits u16
            CompositeOp::Multiply => (a as u16 * b as u16).min(255) as u8,
            CompositeOp::Difference => a.abs_diff(b),
            CompositeOp::Lightest => a.max(b),
            CompositeOp::Darkest => a.min(b),
        }
    }
}

impl Pixmap {
    #[inline]
    fn check_same_size(&self, other: &Pixmap) -> Result<()> {
        if self.width() != other.width() || self.height() != other.height() {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }
        Ok(())
    }

    fn composite(&self, other: &Pixmap, op: CompositeOp) -> Result<Pixmap> {
        self.check_same_size(other)?;
        let mut out = Pixmap::new(self.width(), self.height());
        for ((o, &a), &b) in out
            .data_mut()
            .iter_mut()
            .zip(self.data())
            .zip(other.data())
        {
            *o = op.apply(a, b);
        }
        Ok(out)
    }

    /// Per-channel sum, saturating at 255.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the pixmaps differ in size.
    pub fn add(&self, other: &Pixmap) -> Result<Pixmap> {
        self.composite(other, CompositeOp::Add)
    }

    /// Per-channel difference `self - other`, saturating at 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the pixmaps differ in size.
    pub fn subtract(&self, other: &Pixmap) -> Result<Pixmap> {
        self.composite(other, CompositeOp::Subtract)
    }

    /// Per-channel product, clamped to 255.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the pixmaps differ in size.
    pub fn multiply(&self, other: &Pixmap) -> Result<Pixmap> {
        self.composite(other, CompositeOp::Multiply)
    }

    /// Per-channel absolute difference `|self - other|`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the pixmaps differ in size.
    pub fn difference(&self, other: &Pixmap) -> Result<Pixmap> {
        self.composite(other, CompositeOp::Difference)
    }

    /// Per-channel maximum of the two pixmaps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the pixmaps differ in size.
    pub fn lightest(&self, other: &Pixmap) -> Result<Pixmap> {
        self.composite(other, CompositeOp::Lightest)
    }

    /// Per-channel minimum of the two pixmaps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the pixmaps differ in size.
    pub fn darkest(&self, other: &Pixmap) -> Result<Pixmap> {
        self.composite(other, CompositeOp::Darkest)
    }

    /// Linear blend `self * (1 - alpha) + other * alpha`, per channel.
    ///
    /// The float result is truncated to a byte, so `alpha = 0.0` returns
    /// `self` exactly and `alpha = 1.0` returns `other` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the pixmaps differ in size.
    pub fn alpha_blend(&self, other: &Pixmap, alpha: f32) -> Result<Pixmap> {
        self.check_same_size(other)?;
        let mut out = Pixmap::new(self.width(), self.height());
        for ((o, &a), &b) in out
            .data_mut()
            .iter_mut()
            .zip(self.data())
            .zip(other.data())
        {
            let v = a as f32 * (1.0 - alpha) + b as f32 * alpha;
            *o = v.clamp(0.0, 255.0) as u8;
        }
        Ok(out)
    }
}
