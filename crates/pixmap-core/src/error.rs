//! Error types for pixmap-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Every bounds or size violation surfaces as a checked error in all build
//! profiles; no operation reads or writes out-of-bounds storage.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel coordinates outside the buffer bounds
    #[error("pixel ({row}, {col}) out of range for {width}x{height} buffer")]
    OutOfRange {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },

    /// Flat pixel index outside the buffer bounds
    #[error("pixel index out of range: {index} >= {count}")]
    IndexOutOfRange { index: usize, count: usize },

    /// Binary operation invoked on differently-sized buffers
    #[error("dimension mismatch: {}x{} vs {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Raw byte length does not equal width * height * 3
    #[error(
        "invalid buffer size for {width}x{height}: expected {expected} bytes, got {actual}"
    )]
    InvalidBufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
