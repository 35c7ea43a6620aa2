//! # Trueno-ImgSwap
//!
//! Tap-to-swap image visualization: a scatter of reference points where
//! clicking point `i` replaces the displayed bitmap with bank image `i`.
//!
//! The bank images are false-color renderings of the closed-form field
//! `sin((X + k)^(k+2) + Y^(k+2))` sampled on a square grid over `[0, 2]`,
//! converted to RGBA through an explicit [`colormap::Colormap`]. The
//! selection-to-image binding is a plain function contract
//! ([`binding::SelectionBinding`]) that any UI layer can call; the bundled
//! [`output::HtmlExporter`] wires it into a self-contained HTML page.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_imgswap::prelude::*;
//!
//! let points = ReferenceSelector::new().select_seeded(42)?;
//! let bank = ImageBankGenerator::new().resolution(32).count(5).generate()?;
//! let scene = Scene::new(points, bank)?;
//!
//! let mut active = scene.active()?;
//! active.select(2)?;
//! assert_eq!(active.image(), scene.bank().image(2)?);
//! assert!(active.select(7).is_err());
//!
//! let html = HtmlExporter::new().render(&scene)?;
//! assert!(html.contains("<svg"));
//! # Ok::<(), trueno_imgswap::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable trueno's rayon-backed reductions

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// RGBA pixel color.
pub mod color;

/// RGBA pixel buffer.
pub mod framebuffer;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

/// Explicit colormaps.
pub mod colormap;

/// Signed count handling.
pub mod count;

// ============================================================================
// Image Bank
// ============================================================================

/// Square sampling grids.
pub mod grid;

/// Closed-form scalar fields.
pub mod field;

/// Image bank generation.
pub mod bank;

/// Reference point selection.
pub mod selector;

/// Selection-to-image binding.
pub mod binding;

/// Points paired with their images.
pub mod scene;

// ============================================================================
// Presentation
// ============================================================================

/// Figures (field images, reference scatter).
pub mod plots;

/// Output encoders (PNG, SVG, HTML).
pub mod output;

/// Run configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-imgswap operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_imgswap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bank::{ImageBank, ImageBankGenerator};
    pub use crate::binding::{ActiveImage, SelectionBinding};
    pub use crate::color::Rgba;
    pub use crate::colormap::{Colormap, Palette};
    pub use crate::config::SwapConfig;
    pub use crate::count::CountPolicy;
    pub use crate::error::{Error, Result};
    pub use crate::field::ScalarField;
    pub use crate::framebuffer::Framebuffer;
    pub use crate::grid::SamplingGrid;
    pub use crate::output::{HtmlExporter, PngEncoder, SvgEncoder};
    pub use crate::plots::{FieldImage, Normalization, ScatterPlot};
    pub use crate::scene::Scene;
    pub use crate::selector::{Point, ReferenceSelector};
    pub use batuta_common::display::WithDimensions;
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
