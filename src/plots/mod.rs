//! Figures: false-color field images and the reference scatter.

mod field_image;
mod scatter;

pub use field_image::{FieldImage, Normalization};
pub use scatter::{ScatterPlot, SCATTER_TITLE};
