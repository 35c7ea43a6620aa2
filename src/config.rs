//! Run configuration.
//!
//! Every field defaults to the compiled-in value, so an empty YAML document
//! (or no file at all) reproduces the stock page: five points, five
//! 1000x1000 viridis images, written to `rgba_img_toggle.html`.
//! Precedence is CLI > file > defaults; the binary applies CLI overrides on
//! top of the loaded struct.

use crate::bank::ImageBankGenerator;
use crate::color::Rgba;
use crate::colormap::Palette;
use crate::count::CountPolicy;
use crate::error::{Error, Result};
use crate::grid::{DEFAULT_DOMAIN, DEFAULT_RESOLUTION};
use crate::output::HtmlExporter;
use crate::plots::{Normalization, SCATTER_TITLE};
use crate::selector::{ReferenceSelector, DEFAULT_POINT_COUNT, DEFAULT_VALUE_BOUND};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default output document.
pub const DEFAULT_OUTPUT: &str = "rgba_img_toggle.html";

fn default_points() -> i64 {
    DEFAULT_POINT_COUNT
}
fn default_images() -> i64 {
    5
}
fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}
fn default_domain() -> (f64, f64) {
    DEFAULT_DOMAIN
}
fn default_value_bound() -> u32 {
    DEFAULT_VALUE_BOUND
}
fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}
fn default_plot_size() -> u32 {
    400
}
fn default_point_size() -> f32 {
    20.0
}
fn default_scatter_title() -> String {
    SCATTER_TITLE.to_string()
}
fn default_point_color() -> String {
    "#1f77b4".to_string()
}

/// Complete run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapConfig {
    /// Number of reference points.
    #[serde(default = "default_points")]
    pub points: i64,

    /// Number of bank images.
    #[serde(default = "default_images")]
    pub images: i64,

    /// Samples per axis of each bank image.
    #[serde(default = "default_resolution")]
    pub resolution: usize,

    /// Sampling domain on both axes.
    #[serde(default = "default_domain")]
    pub domain: (f64, f64),

    /// Exclusive upper bound of point values.
    #[serde(default = "default_value_bound")]
    pub value_bound: u32,

    /// Seed for point values; `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Colormap palette.
    #[serde(default)]
    pub palette: Palette,

    /// Field normalization before color lookup.
    #[serde(default)]
    pub normalization: Normalization,

    /// Handling of negative counts.
    #[serde(default)]
    pub count_policy: CountPolicy,

    /// Output HTML path.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Optional directory for one PNG per bank image.
    #[serde(default)]
    pub png_dir: Option<PathBuf>,

    /// Figure width in CSS pixels.
    #[serde(default = "default_plot_size")]
    pub plot_width: u32,

    /// Figure height in CSS pixels.
    #[serde(default = "default_plot_size")]
    pub plot_height: u32,

    /// Marker diameter in CSS pixels.
    #[serde(default = "default_point_size")]
    pub point_size: f32,

    /// Title above the scatter figure.
    #[serde(default = "default_scatter_title")]
    pub scatter_title: String,

    /// Marker color as `#rrggbb`.
    #[serde(default = "default_point_color")]
    pub point_color: String,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            points: default_points(),
            images: default_images(),
            resolution: default_resolution(),
            domain: default_domain(),
            value_bound: default_value_bound(),
            seed: None,
            palette: Palette::default(),
            normalization: Normalization::default(),
            count_policy: CountPolicy::default(),
            output: default_output(),
            png_dir: None,
            plot_width: default_plot_size(),
            plot_height: default_plot_size(),
            point_size: default_point_size(),
            scatter_title: default_scatter_title(),
            point_color: default_point_color(),
        }
    }
}

impl SwapConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse {
            line: 0,
            message: e.to_string(),
        })
    }

    /// Parsed marker color.
    pub fn marker_color(&self) -> Result<Rgba> {
        Rgba::from_hex(&self.point_color)
    }

    /// Point selector described by this configuration.
    #[must_use]
    pub fn selector(&self) -> ReferenceSelector {
        ReferenceSelector::new()
            .count(self.points)
            .value_bound(self.value_bound)
            .count_policy(self.count_policy)
    }

    /// Image bank generator described by this configuration.
    #[must_use]
    pub fn generator(&self) -> ImageBankGenerator {
        ImageBankGenerator::new()
            .count(self.images)
            .resolution(self.resolution)
            .domain(self.domain.0, self.domain.1)
            .palette(self.palette)
            .normalization(self.normalization)
            .count_policy(self.count_policy)
    }

    /// HTML exporter described by this configuration.
    pub fn exporter(&self) -> Result<HtmlExporter> {
        Ok(HtmlExporter::new()
            .plot_dimensions(self.plot_width, self.plot_height)
            .point_size(self.point_size)
            .scatter_title(&self.scatter_title)
            .point_color(self.marker_color()?))
    }
}
