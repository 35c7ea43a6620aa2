//! Output encoders (PNG, SVG, HTML).

mod html;
mod png_encoder;
mod svg;

pub use html::{HtmlExporter, IMAGE_TITLE, PAGE_TITLE};
pub use png_encoder::PngEncoder;
pub use svg::{SvgElement, SvgEncoder, TextAnchor};
