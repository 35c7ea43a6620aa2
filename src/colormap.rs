//! Explicit colormaps for false-color rendering.
//!
//! A [`Colormap`] is a pure function from a normalized scalar `t` in `[0, 1]`
//! to an [`Rgba`] pixel: piecewise-linear interpolation between evenly spaced
//! control points. Values outside `[0, 1]` are clamped; NaN maps to the
//! `bad` color.
//!
//! # References
//!
//! - van der Walt, S., & Smith, N. (2015). "mpl colormaps" (viridis, magma).
//! - Borland, D., & Taylor, R. M. (2007). "Rainbow Color Map (Still) Considered Harmful."
//!   IEEE Computer Graphics and Applications.

use crate::color::Rgba;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Viridis sampled at nine evenly spaced positions.
const VIRIDIS: [Rgba; 9] = [
    Rgba::rgb(68, 1, 84),
    Rgba::rgb(71, 45, 123),
    Rgba::rgb(59, 82, 139),
    Rgba::rgb(44, 114, 142),
    Rgba::rgb(33, 145, 140),
    Rgba::rgb(40, 174, 128),
    Rgba::rgb(94, 201, 98),
    Rgba::rgb(173, 220, 48),
    Rgba::rgb(253, 231, 37),
];

/// Magma sampled at nine evenly spaced positions.
const MAGMA: [Rgba; 9] = [
    Rgba::rgb(0, 0, 4),
    Rgba::rgb(28, 16, 68),
    Rgba::rgb(79, 18, 123),
    Rgba::rgb(129, 37, 129),
    Rgba::rgb(181, 54, 122),
    Rgba::rgb(229, 89, 100),
    Rgba::rgb(251, 135, 97),
    Rgba::rgb(254, 194, 135),
    Rgba::rgb(252, 253, 191),
];

/// Named built-in palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Viridis (perceptually uniform, colorblind-safe).
    #[default]
    Viridis,
    /// Magma (perceptually uniform).
    Magma,
    /// Black to white.
    Greyscale,
}

impl Palette {
    /// All built-in palettes.
    pub const ALL: [Self; 3] = [Self::Viridis, Self::Magma, Self::Greyscale];

    /// Lowercase palette name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Viridis => "viridis",
            Self::Magma => "magma",
            Self::Greyscale => "greyscale",
        }
    }

    fn stops(self) -> Vec<Rgba> {
        match self {
            Self::Viridis => VIRIDIS.to_vec(),
            Self::Magma => MAGMA.to_vec(),
            Self::Greyscale => vec![Rgba::BLACK, Rgba::WHITE],
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "viridis" => Ok(Self::Viridis),
            "magma" => Ok(Self::Magma),
            "greyscale" | "grayscale" | "grey" | "gray" => Ok(Self::Greyscale),
            _ => Err(Error::UnknownPalette(s.to_string())),
        }
    }
}

/// Piecewise-linear colormap over `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colormap {
    stops: Vec<Rgba>,
    bad: Rgba,
}

impl Default for Colormap {
    fn default() -> Self {
        Self::from_palette(Palette::default())
    }
}

impl From<Palette> for Colormap {
    fn from(palette: Palette) -> Self {
        Self::from_palette(palette)
    }
}

impl Colormap {
    /// Create a colormap from evenly spaced control points.
    ///
    /// # Errors
    ///
    /// Returns an error if `stops` is empty.
    pub fn new(stops: Vec<Rgba>) -> Result<Self> {
        if stops.is_empty() {
            return Err(Error::ScaleDomain("Colormap requires at least one color".to_string()));
        }
        Ok(Self {
            stops,
            bad: Rgba::TRANSPARENT,
        })
    }

    /// Built-in palette.
    #[must_use]
    pub fn from_palette(palette: Palette) -> Self {
        Self {
            stops: palette.stops(),
            bad: Rgba::TRANSPARENT,
        }
    }

    /// Set the color used for NaN inputs.
    #[must_use]
    pub fn with_bad(mut self, bad: Rgba) -> Self {
        self.bad = bad;
        self
    }

    /// Color used for NaN inputs.
    #[must_use]
    pub const fn bad(&self) -> Rgba {
        self.bad
    }

    /// Control points.
    #[must_use]
    pub fn stops(&self) -> &[Rgba] {
        &self.stops
    }

    /// Map a normalized scalar to a color.
    #[must_use]
    pub fn map(&self, t: f64) -> Rgba {
        if t.is_nan() {
            return self.bad;
        }
        let t = t.clamp(0.0, 1.0);

        if self.stops.len() == 1 {
            return self.stops[0];
        }

        let segment_count = self.stops.len() - 1;
        let scaled = t * segment_count as f64;
        let segment = (scaled.floor() as usize).min(segment_count - 1);
        let local_t = scaled - segment as f64;

        self.stops[segment].lerp(self.stops[segment + 1], local_t)
    }

    /// Map a normalized scalar straight to channel values.
    #[must_use]
    pub fn map_channels(&self, t: f64) -> [u8; 4] {
        self.map(t).to_array()
    }
}
