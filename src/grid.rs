//! Square sampling grids.
//!
//! A [`SamplingGrid`] is the `meshgrid` of one `linspace` axis with itself:
//! `X[i][j] = axis[j]` and `Y[i][j] = axis[i]`. Only the axis is stored.

use crate::error::{Error, Result};

/// Default grid resolution (samples per axis).
pub const DEFAULT_RESOLUTION: usize = 1000;

/// Default sampling domain on both axes.
pub const DEFAULT_DOMAIN: (f64, f64) = (0.0, 2.0);

/// Largest accepted resolution; keeps pixel dimensions inside `u32` and the
/// buffer allocation sane.
pub const MAX_RESOLUTION: usize = 16_384;

/// `n` evenly spaced samples over `[start, end]`, endpoints included.
///
/// `n == 1` yields `[start]`; `n == 0` yields an empty vector.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Square `resolution x resolution` sampling grid over `domain` on both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingGrid {
    axis: Vec<f64>,
    domain: (f64, f64),
}

impl SamplingGrid {
    /// Create a square grid.
    ///
    /// # Errors
    ///
    /// Returns an error if `resolution` is zero or above [`MAX_RESOLUTION`], or
    /// if the domain bounds are not finite or `start > end`.
    pub fn square(resolution: usize, domain: (f64, f64)) -> Result<Self> {
        if resolution == 0 || resolution > MAX_RESOLUTION {
            return Err(Error::InvalidResolution(resolution));
        }
        let (start, end) = domain;
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(Error::InvalidDomain(start, end));
        }

        Ok(Self {
            axis: linspace(start, end, resolution),
            domain,
        })
    }

    /// Samples per axis.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.axis.len()
    }

    /// Sampling domain.
    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The shared axis samples.
    #[must_use]
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    /// `X[row][col]`.
    #[must_use]
    pub fn x(&self, _row: usize, col: usize) -> f64 {
        self.axis[col]
    }

    /// `Y[row][col]`.
    #[must_use]
    pub fn y(&self, row: usize, _col: usize) -> f64 {
        self.axis[row]
    }
}
