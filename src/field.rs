//! Closed-form scalar fields sampled on a [`SamplingGrid`].
//!
//! The image for bank slot `k` is driven by
//!
//! ```text
//! data[i][j] = sin((X[i][j] + k)^(k+2) + Y[i][j]^(k+2))
//! ```
//!
//! evaluated in `f64`. The exponent grows with `k`, so later slots oscillate
//! faster; for large `k` the power overflows to infinity and `sin` yields NaN.
//! Those samples are kept as-is and rendered with the colormap's `bad` color.

use crate::grid::SamplingGrid;

/// Row-major 2-D field of `f64` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// `base^exp` with an integer exponent, falling back to `powf` past `i32`.
fn pow_index(base: f64, exp: usize) -> f64 {
    match i32::try_from(exp) {
        Ok(e) => base.powi(e),
        Err(_) => base.powf(exp as f64),
    }
}

impl ScalarField {
    /// Sample the sine field for bank slot `k`.
    #[must_use]
    pub fn sine(grid: &SamplingGrid, k: usize) -> Self {
        let n = grid.resolution();
        let exp = k.saturating_add(2);
        let shift = k as f64;

        // X depends only on the column and Y only on the row, so both power
        // terms are computed once per axis sample.
        let x_terms: Vec<f64> = grid.axis().iter().map(|&x| pow_index(x + shift, exp)).collect();
        let y_terms: Vec<f64> = grid.axis().iter().map(|&y| pow_index(y, exp)).collect();

        let mut values = Vec::with_capacity(n * n);
        for y_term in &y_terms {
            values.extend(x_terms.iter().map(|x_term| (x_term + y_term).sin()));
        }

        Self {
            values,
            rows: n,
            cols: n,
        }
    }

    /// Wrap precomputed row-major samples.
    ///
    /// Returns `None` if `values.len() != rows * cols`.
    #[must_use]
    pub fn from_values(values: Vec<f64>, rows: usize, cols: usize) -> Option<Self> {
        (values.len() == rows * cols).then_some(Self { values, rows, cols })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// All samples, row-major.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sample at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.values[row * self.cols + col])
    }

    /// `(min, max)` over the finite samples, `None` if there are none.
    #[must_use]
    pub fn extent(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Number of NaN or infinite samples.
    #[must_use]
    pub fn non_finite_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_finite()).count()
    }
}
