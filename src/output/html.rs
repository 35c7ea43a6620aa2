//! Self-contained HTML page output.
//!
//! The page shows the reference scatter (inline SVG) next to the active
//! image. Every bank image is embedded as a PNG data URI and a small inline
//! script swaps the displayed image when a marker is clicked. The script
//! applies the same guard as [`crate::binding::ActiveImage`]: an index
//! outside the bank is logged to the console and leaves the image as is.

use super::svg::escape_xml;
use super::PngEncoder;
use crate::color::Rgba;
use crate::error::Result;
use crate::plots::{ScatterPlot, SCATTER_TITLE};
use crate::scene::Scene;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

/// Default title of the image figure.
pub const IMAGE_TITLE: &str = "this is a static image";

/// Default page title.
pub const PAGE_TITLE: &str = "RGBA image toggle";

const STYLE: &str = r"
    body { font-family: sans-serif; margin: 1.5rem; background: #fafafa; }
    .row { display: flex; gap: 1.5rem; align-items: flex-start; }
    .figure { background: #fff; border: 1px solid #e5e5e5; padding: 0.5rem; }
    .figure h2 { font-size: 14px; font-weight: normal; text-align: center; margin: 0.25rem 0; }
    #scatter circle.point { cursor: pointer; }
    #scatter circle.point.selected { stroke: #000; stroke-width: 2; }
    #active-image { display: block; image-rendering: pixelated; }
";

const SCRIPT: &str = r##"
  (function () {
    var img = document.getElementById("active-image");
    var markers = document.querySelectorAll("#scatter circle.point");

    function selectImage(index) {
      if (!Number.isInteger(index) || index < 0 || index >= bank.length) {
        console.warn("ignoring selection " + index + ": image bank holds " + bank.length + " images");
        return false;
      }
      img.src = bank[index];
      img.setAttribute("data-index", String(index));
      markers.forEach(function (m) {
        m.classList.toggle("selected", Number(m.getAttribute("data-index")) === index);
      });
      return true;
    }

    markers.forEach(function (m) {
      m.addEventListener("click", function () {
        selectImage(Number(m.getAttribute("data-index")));
      });
    });

    window.selectImage = selectImage;
    selectImage(0);
  })();
"##;

/// Writes a [`Scene`] as one HTML document.
#[derive(Debug, Clone)]
pub struct HtmlExporter {
    page_title: String,
    scatter_title: String,
    image_title: String,
    plot_width: u32,
    plot_height: u32,
    point_size: f32,
    point_color: Rgba,
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlExporter {
    /// Exporter with two 400x400 figures.
    #[must_use]
    pub fn new() -> Self {
        Self {
            page_title: PAGE_TITLE.to_string(),
            scatter_title: SCATTER_TITLE.to_string(),
            image_title: IMAGE_TITLE.to_string(),
            plot_width: 400,
            plot_height: 400,
            point_size: 20.0,
            point_color: Rgba::MARKER,
        }
    }

    /// Set the document title.
    #[must_use]
    pub fn page_title(mut self, title: &str) -> Self {
        self.page_title = title.to_string();
        self
    }

    /// Set the scatter figure title.
    #[must_use]
    pub fn scatter_title(mut self, title: &str) -> Self {
        self.scatter_title = title.to_string();
        self
    }

    /// Set the image figure title.
    #[must_use]
    pub fn image_title(mut self, title: &str) -> Self {
        self.image_title = title.to_string();
        self
    }

    /// Size of each figure in CSS pixels.
    #[must_use]
    pub fn plot_dimensions(mut self, width: u32, height: u32) -> Self {
        self.plot_width = width;
        self.plot_height = height;
        self
    }

    /// Marker diameter in CSS pixels.
    #[must_use]
    pub fn point_size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }

    /// Marker color.
    #[must_use]
    pub fn point_color(mut self, color: Rgba) -> Self {
        self.point_color = color;
        self
    }

    /// Render the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene has no points or PNG encoding fails.
    pub fn render(&self, scene: &Scene) -> Result<String> {
        let scatter = ScatterPlot::new()
            .points(scene.points())
            .color(self.point_color)
            .size(self.point_size)
            .dimensions(self.plot_width, self.plot_height)
            .title(&self.scatter_title)
            .build()?
            .to_svg()?
            .render();

        let uris = scene
            .bank()
            .iter()
            .map(PngEncoder::to_data_uri)
            .collect::<Result<Vec<_>>>()?;

        let mut html = String::with_capacity(uris.iter().map(String::len).sum::<usize>() + 8192);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape_xml(&self.page_title));
        let _ = writeln!(html, "<style>{STYLE}</style>\n</head>\n<body>\n<div class=\"row\">");

        let _ = writeln!(html, "<div class=\"figure\" id=\"scatter\">\n{scatter}</div>");
        let _ = writeln!(
            html,
            "<div class=\"figure\">\n<h2>{}</h2>\n<img id=\"active-image\" alt=\"{}\" width=\"{}\" height=\"{}\">\n</div>",
            escape_xml(&self.image_title),
            escape_xml(&self.image_title),
            self.plot_width,
            self.plot_height
        );
        html.push_str("</div>\n<script>\n  var bank = [\n");
        for uri in &uris {
            let _ = writeln!(html, "    \"{uri}\",");
        }
        html.push_str("  ];\n");
        html.push_str(SCRIPT);
        html.push_str("</script>\n</body>\n</html>\n");

        log::info!(
            "rendered page: {} points, {} embedded images, {} bytes",
            scene.points().len(),
            uris.len(),
            html.len()
        );
        Ok(html)
    }

    /// Render the page and write it to `path`.
    pub fn write_to_file<P: AsRef<Path>>(&self, scene: &Scene, path: P) -> Result<()> {
        let html = self.render(scene)?;
        fs::write(path, html)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::ImageBankGenerator;
    use crate::selector::ReferenceSelector;

    fn scene(n: i64) -> Scene {
        let points = ReferenceSelector::new().count(n).select_seeded(11).unwrap();
        let bank = ImageBankGenerator::new().resolution(8).count(n).generate().unwrap();
        Scene::new(points, bank).unwrap()
    }

    #[test]
    fn test_page_structure() {
        let html = HtmlExporter::new().render(&scene(5)).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<svg"));
        assert!(html.contains("id=\"active-image\""));
        assert!(html.contains(IMAGE_TITLE));
        assert!(html.contains("Click the dots to switch images"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_embeds_one_uri_per_image() {
        let html = HtmlExporter::new().render(&scene(5)).unwrap();
        assert_eq!(html.matches("\"data:image/png;base64,").count(), 5);
        assert_eq!(html.matches("class=\"point\"").count(), 5);
    }

    #[test]
    fn test_script_guards_index() {
        let html = HtmlExporter::new().render(&scene(2)).unwrap();
        assert!(html.contains("index >= bank.length"));
        assert!(html.contains("selectImage(0)"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let html = HtmlExporter::new()
            .page_title("a < b")
            .render(&scene(1))
            .unwrap();
        assert!(html.contains("<title>a &lt; b</title>"));
    }

    #[test]
    fn test_custom_figure_titles() {
        let html = HtmlExporter::new()
            .scatter_title("Pick a slot")
            .image_title("slot preview")
            .render(&scene(2))
            .unwrap();
        assert!(html.contains(">Pick a slot</text>"));
        assert!(!html.contains(SCATTER_TITLE));
        assert!(html.contains("<h2>slot preview</h2>"));
    }

    #[test]
    fn test_script_selects_scatter_markers() {
        let html = HtmlExporter::new().render(&scene(3)).unwrap();
        assert!(html.contains(r##"querySelectorAll("#scatter circle.point")"##));
        assert!(html.contains("id=\"scatter\""));
        assert!(html.contains("window.selectImage = selectImage;"));
    }

    #[test]
    fn test_invalid_point_size_rejected() {
        let result = HtmlExporter::new().point_size(0.0).render(&scene(2));
        assert!(matches!(result, Err(crate::error::Error::InvalidPointSize(_))));
    }

    #[test]
    fn test_empty_scene_rejected() {
        let empty = Scene::new(Vec::new(), Default::default()).unwrap();
        assert!(HtmlExporter::new().render(&empty).is_err());
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        HtmlExporter::new().write_to_file(&scene(3), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("var bank = ["));
    }
}
