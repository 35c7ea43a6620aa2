//! Error types for trueno-imgswap operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-imgswap operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// PNG decoding error.
    #[error("PNG decoding error: {0}")]
    PngDecoding(#[from] png::DecodingError),

    /// Decoded PNG is not 8-bit RGBA.
    #[error("Unsupported PNG format: {color:?} at {depth:?}")]
    UnsupportedPng {
        /// Decoded color type.
        color: png::ColorType,
        /// Decoded bit depth.
        depth: png::BitDepth,
    },

    /// Negative count passed to a generator under the strict count policy.
    #[error("Invalid count: {count} (must be >= 0)")]
    InvalidCount {
        /// The rejected count.
        count: i64,
    },

    /// Selection index outside the image bank.
    #[error("Selection index {index} out of range for image bank of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Image bank length.
        len: usize,
    },

    /// An active image was requested from an empty image bank.
    #[error("Image bank is empty")]
    EmptyBank,

    /// Point and image counts differ, so some selections would be unbound.
    #[error("Image bank size mismatch: {points} points but {images} images")]
    BankSizeMismatch {
        /// Number of reference points.
        points: usize,
        /// Number of bank images.
        images: usize,
    },

    /// Invalid dimensions for framebuffer or plot.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Marker size is not a positive length that fits the plot area.
    #[error("Invalid point size: {0}")]
    InvalidPointSize(f32),

    /// Sampling grid resolution out of range.
    #[error("Invalid grid resolution: {0}")]
    InvalidResolution(usize),

    /// Sampling domain is empty or not finite.
    #[error("Invalid sampling domain: [{0}, {1}]")]
    InvalidDomain(f64, f64),

    /// Upper bound for random point values must be positive.
    #[error("Value bound must be greater than zero")]
    InvalidValueBound,

    /// Data length mismatch between x and y arrays.
    #[error("Data length mismatch: x has {x_len} elements, y has {y_len} elements")]
    DataLengthMismatch {
        /// Length of x data.
        x_len: usize,
        /// Length of y data.
        y_len: usize,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Scale domain error (e.g., equal min and max).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Palette name not recognized.
    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    /// Normalization name not recognized.
    #[error("Unknown normalization: {0}")]
    UnknownNormalization(String),

    /// Configuration could not be parsed.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number (1-based, 0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = Error::IndexOutOfRange { index: 7, len: 5 };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_invalid_count_display() {
        let err = Error::InvalidCount { count: -3 };
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_invalid_point_size_display() {
        let err = Error::InvalidPointSize(-4.0);
        assert!(err.to_string().contains("-4"));
    }

    #[test]
    fn test_io_from() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
