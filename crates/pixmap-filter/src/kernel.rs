//! Convolution kernels
//!
//! A [`Kernel`] is an immutable square matrix of signed integer weights with
//! an odd side length, paired with a floating-point scale factor applied to
//! every kernel-weighted sum. Carrying the side length and scale inside the
//! value rules out mismatched array-length/side-length bugs at the call site.

use crate::{FilterError, FilterResult};

/// A square convolution kernel with scale factor
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length (odd)
    side: usize,
    /// Scale factor applied to every weighted sum
    scale: f32,
    /// Weights in row-major order, `side * side` entries
    weights: Vec<i32>,
}

impl Kernel {
    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `side` is even or zero, or
    /// if `weights.len() != side * side`.
    pub fn from_slice(side: usize, scale: f32, weights: &[i32]) -> FilterResult<Kernel> {
        if side == 0 || side % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "side length must be odd, got {side}"
            )));
        }
        if weights.len() != side * side {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for side {side}, got {}",
                side * side,
                weights.len()
            )));
        }
        Ok(Kernel {
            side,
            scale,
            weights: weights.to_vec(),
        })
    }

    /// Side length of the kernel.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Scale factor.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Weight at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below the side length.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        assert!(row < self.side && col < self.side);
        self.weights[row * self.side + col]
    }

    /// 3x3 identity kernel: convolving with it reproduces the input.
    pub fn identity() -> Kernel {
        Kernel {
            side: 3,
            scale: 1.0,
            weights: vec![0, 0, 0, 0, 1, 0, 0, 0, 0],
        }
    }

    /// 3x3 sharpening kernel.
    pub fn sharpen() -> Kernel {
        Kernel {
            side: 3,
            scale: 1.0,
            weights: vec![0, -1, 0, -1, 5, -1, 0, -1, 0],
        }
    }

    /// 3x3 Gaussian blur kernel, scale 1/16.
    pub fn gaussian_blur() -> Kernel {
        Kernel {
            side: 3,
            scale: 1.0 / 16.0,
            weights: vec![1, 2, 1, 2, 4, 2, 1, 2, 1],
        }
    }

    /// 3x3 box blur kernel (all ones), scale 1/9.
    pub fn box_blur() -> Kernel {
        Kernel {
            side: 3,
            scale: 1.0 / 9.0,
            weights: vec![1; 9],
        }
    }

    /// 3x3 ridge detection kernel.
    pub fn ridge_detection() -> Kernel {
        Kernel {
            side: 3,
            scale: 1.0,
            weights: vec![-1, -1, -1, -1, 8, -1, -1, -1, -1],
        }
    }

    /// 5x5 unsharp masking kernel (binomial with negated center), scale
    /// -1/256.
    pub fn unsharp_masking() -> Kernel {
        #[rustfmt::skip]
        let weights = vec![
            1,  4,    6,  4, 1,
            4, 16,   24, 16, 4,
            6, 24, -476, 24, 6,
            4, 16,   24, 16, 4,
            1,  4,    6,  4, 1,
        ];
        Kernel {
            side: 5,
            scale: -1.0 / 256.0,
            weights,
        }
    }

    /// 3x3 Sobel kernel for horizontal gradients.
    pub fn sobel_horizontal() -> Kernel {
        Kernel {
            side: 3,
            scale: 1.0,
            weights: vec![-1, 0, 1, -2, 0, 2, -1, 0, 1],
        }
    }

    /// 3x3 Sobel kernel for vertical gradients.
    pub fn sobel_vertical() -> Kernel {
        Kernel {
            side: 3,
            scale: 1.0,
            weights: vec![1, 2, 1, 0, 0, 0, -1, -2, -1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_validates_side() {
        assert!(Kernel::from_slice(0, 1.0, &[]).is_err());
        assert!(Kernel::from_slice(2, 1.0, &[1, 2, 3, 4]).is_err());
        assert!(Kernel::from_slice(3, 1.0, &[0; 9]).is_ok());
    }

    #[test]
    fn test_from_slice_validates_length() {
        assert!(matches!(
            Kernel::from_slice(3, 1.0, &[0; 8]),
            Err(FilterError::InvalidKernel(_))
        ));
    }

    #[test]
    fn test_get_row_major() {
        let k = Kernel::from_slice(3, 1.0, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert_eq!(k.get(0, 0), 1);
        assert_eq!(k.get(1, 2), 6);
        assert_eq!(k.get(2, 1), 8);
    }

    #[test]
    fn test_named_kernels_are_well_formed() {
        for k in [
            Kernel::identity(),
            Kernel::sharpen(),
            Kernel::gaussian_blur(),
            Kernel::box_blur(),
            Kernel::ridge_detection(),
            Kernel::sobel_horizontal(),
            Kernel::sobel_vertical(),
        ] {
            assert_eq!(k.side(), 3);
        }
        assert_eq!(Kernel::unsharp_masking().side(), 5);
        assert_eq!(Kernel::unsharp_masking().get(2, 2), -476);
    }

    #[test]
    fn test_blur_kernels_normalize_to_one() {
        for k in [Kernel::gaussian_blur(), Kernel::box_blur()] {
            let sum: i32 = (0..k.side())
                .flat_map(|r| (0..k.side()).map(move |c| (r, c)))
                .map(|(r, c)| k.get(r, c))
                .sum();
            assert!((sum as f32 * k.scale() - 1.0).abs() < 1e-6);
        }
    }
}
