//! False-color rendering of scalar fields.
//!
//! Each field sample becomes exactly one pixel: row `i` of the field is row
//! `i` of the image (top row first), column `j` is column `j`. Samples are
//! normalized to `[0, 1]` and passed through a [`Colormap`].

use crate::colormap::{Colormap, Palette};
use crate::error::{Error, Result};
use crate::field::ScalarField;
use crate::framebuffer::{Framebuffer, CHANNELS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How field samples are mapped onto `[0, 1]` before color lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Fixed `[-1, 1]` range of the sine: `t = (v + 1) / 2`.
    #[default]
    Symmetric,
    /// The field's own finite `[min, max]` range.
    Extent,
}

impl Normalization {
    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Symmetric => "symmetric",
            Self::Extent => "extent",
        }
    }

    /// Resolve the `(offset, span)` pair so that `t = (v - offset) / span`.
    ///
    /// A zero span (constant field under `Extent`) is reported as `None`.
    fn bounds(self, field: &ScalarField) -> Option<(f64, f64)> {
        match self {
            Self::Symmetric => Some((-1.0, 2.0)),
            Self::Extent => field
                .extent()
                .map(|(lo, hi)| (lo, hi - lo))
                .filter(|&(_, span)| span > 0.0),
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Normalization {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "symmetric" => Ok(Self::Symmetric),
            "extent" => Ok(Self::Extent),
            _ => Err(Error::UnknownNormalization(s.to_string())),
        }
    }
}

fn to_unit(bounds: Option<(f64, f64)>, value: f64) -> f64 {
    match bounds {
        Some((offset, span)) => (value - offset) / span,
        None if value.is_finite() => 0.5,
        None => f64::NAN,
    }
}

/// Renders a [`ScalarField`] into an RGBA [`Framebuffer`].
#[derive(Debug, Clone, Default)]
pub struct FieldImage {
    colormap: Colormap,
    normalization: Normalization,
}

impl FieldImage {
    /// Renderer with the default palette (viridis) and symmetric normalization.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a built-in palette.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.colormap = Colormap::from_palette(palette);
        self
    }

    /// Use a custom colormap.
    #[must_use]
    pub fn colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    /// Set the normalization policy.
    #[must_use]
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// The active colormap.
    #[must_use]
    pub fn active_colormap(&self) -> &Colormap {
        &self.colormap
    }

    /// Normalize one sample of `field` the way [`FieldImage::render`] does.
    #[must_use]
    pub fn normalize(&self, field: &ScalarField, value: f64) -> f64 {
        to_unit(self.normalization.bounds(field), value)
    }

    /// Render the field, one pixel per sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is empty or too large for `u32` dimensions.
    pub fn render(&self, field: &ScalarField) -> Result<Framebuffer> {
        let too_large = || Error::InvalidDimensions {
            width: u32::try_from(field.cols()).unwrap_or(u32::MAX),
            height: u32::try_from(field.rows()).unwrap_or(u32::MAX),
        };
        let width = u32::try_from(field.cols()).map_err(|_| too_large())?;
        let height = u32::try_from(field.rows()).map_err(|_| too_large())?;
        let mut fb = Framebuffer::new(width, height)?;

        let bounds = self.normalization.bounds(field);

        for (y, samples) in field.values().chunks_exact(field.cols()).enumerate() {
            if let Some(row) = fb.row_mut(y as u32) {
                for (px, &v) in row.chunks_exact_mut(CHANNELS).zip(samples) {
                    px.copy_from_slice(&self.colormap.map_channels(to_unit(bounds, v)));
                }
            }
        }

        Ok(fb)
    }
}
