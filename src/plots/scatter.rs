//! Reference scatter figure.
//!
//! Draws the reference points as filled circles and answers hit tests, so
//! both the raster figure and the SVG page figure map a click at a pixel
//! position back to a point index.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::output::{SvgEncoder, TextAnchor};
use crate::scale::{LinearScale, Scale};
use crate::selector::Point;

/// Default figure title, shown above the scatter.
pub const SCATTER_TITLE: &str = "Click the dots to switch images";

/// Builder for the reference scatter figure.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    points: Vec<Point>,
    color: Rgba,
    point_size: f32,
    width: u32,
    height: u32,
    margin: u32,
    title: String,
}

impl Default for ScatterPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ScatterPlot {
    /// Create a new 400x400 scatter figure with 20 px markers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            color: Rgba::MARKER,
            point_size: 20.0,
            width: 400,
            height: 400,
            margin: 40,
            title: SCATTER_TITLE.to_string(),
        }
    }

    /// Set the reference points.
    #[must_use]
    pub fn points(mut self, points: &[Point]) -> Self {
        self.points = points.to_vec();
        self
    }

    /// Set the marker color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set the marker diameter in pixels.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }

    /// Set the output dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the figure title.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Get the number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Output width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Output height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Build and validate the scatter figure.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no points, the plot area is empty, or
    /// the marker size is not finite, not positive, or wider than the plot area.
    pub fn build(self) -> Result<Self> {
        if self.points.is_empty() {
            return Err(Error::EmptyData);
        }
        if self.width <= 2 * self.margin || self.height <= 2 * self.margin {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        self.check_point_size()?;
        Ok(self)
    }

    fn check_point_size(&self) -> Result<()> {
        let area = self.width.min(self.height).saturating_sub(2 * self.margin) as f32;
        if !self.point_size.is_finite() || self.point_size <= 0.0 || self.point_size > area {
            return Err(Error::InvalidPointSize(self.point_size));
        }
        Ok(())
    }

    fn scales(&self) -> Result<(LinearScale, LinearScale)> {
        let xs: Vec<f32> = self.points.iter().map(|p| p.index as f32).collect();
        let ys: Vec<f32> = self.points.iter().map(|p| p.value as f32).collect();

        let left = self.margin as f32;
        let right = self.width.saturating_sub(self.margin) as f32;
        let top = self.margin as f32;
        let bottom = self.height.saturating_sub(self.margin) as f32;

        let x_scale = LinearScale::padded(&xs, 0.5, (left, right)).ok_or(Error::EmptyData)?;
        let y_scale = LinearScale::padded(&ys, 1.0, (bottom, top)).ok_or(Error::EmptyData)?;
        Ok((x_scale, y_scale))
    }

    /// Pixel centers of all markers, in point order.
    pub fn marker_positions(&self) -> Result<Vec<(f32, f32)>> {
        let (x_scale, y_scale) = self.scales()?;
        Ok(self
            .points
            .iter()
            .map(|p| (x_scale.scale(p.index as f32), y_scale.scale(p.value as f32)))
            .collect())
    }

    /// Index of the point whose marker covers pixel `(px, py)`.
    ///
    /// Overlapping markers resolve to the nearest center, then the lowest
    /// index. Clicks on empty space return `None`.
    #[must_use]
    pub fn hit_test(&self, px: f32, py: f32) -> Option<usize> {
        let radius = self.point_size / 2.0;
        let positions = self.marker_positions().ok()?;

        positions
            .iter()
            .zip(&self.points)
            .map(|(&(cx, cy), p)| ((cx - px).powi(2) + (cy - py).powi(2), p.index))
            .filter(|&(d2, _)| d2 <= radius * radius)
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(_, index)| index)
    }

    /// Render the markers into a framebuffer.
    pub fn render(&self, fb: &mut Framebuffer) -> Result<()> {
        self.check_point_size()?;
        let radius = i64::from((self.point_size / 2.0) as u32);

        for (px, py) in self.marker_positions()? {
            let (px, py) = (px.round() as i64, py.round() as i64);
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    if dx * dx + dy * dy > radius * radius {
                        continue;
                    }
                    let (x, y) = (px + dx, py + dy);
                    if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
                        fb.set_pixel(x, y, self.color);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render to a new white framebuffer with a framed plot area.
    pub fn to_framebuffer(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(Rgba::WHITE);

        let m = self.margin;
        let (w, h) = (self.width.saturating_sub(2 * m), self.height.saturating_sub(2 * m));
        fb.fill_rect(m, m, w, 1, Rgba::FRAME);
        fb.fill_rect(m, (m + h).saturating_sub(1), w, 1, Rgba::FRAME);
        fb.fill_rect(m, m, 1, h, Rgba::FRAME);
        fb.fill_rect((m + w).saturating_sub(1), m, 1, h, Rgba::FRAME);

        self.render(&mut fb)?;
        Ok(fb)
    }

    /// Vector figure with one selectable marker per point.
    pub fn to_svg(&self) -> Result<SvgEncoder> {
        self.check_point_size()?;
        let (w, h, m) = (self.width as f32, self.height as f32, self.margin as f32);
        let mut svg = SvgEncoder::new(self.width, self.height)
            .frame(m, m, w - 2.0 * m, h - 2.0 * m, Rgba::FRAME)
            .text_anchored(w / 2.0, m / 2.0 + 6.0, &self.title, 14.0, Rgba::BLACK, TextAnchor::Middle);

        for ((cx, cy), point) in self.marker_positions()?.into_iter().zip(&self.points) {
            svg = svg.marker(cx, cy, self.point_size / 2.0, self.color, point.index);
        }
        Ok(svg)
    }
}

impl batuta_common::display::WithDimensions for ScatterPlot {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use batuta_common::display::WithDimensions;

    fn points() -> Vec<Point> {
        [3, 17, 0, 9, 9]
            .iter()
            .enumerate()
            .map(|(index, &value)| Point { index, value })
            .collect()
    }

    #[test]
    fn test_scatter_plot_builder() {
        let plot = ScatterPlot::new().points(&points()).build().unwrap();
        assert_eq!(plot.point_count(), 5);
    }

    #[test]
    fn test_scatter_plot_empty_data() {
        assert!(matches!(ScatterPlot::new().build(), Err(Error::EmptyData)));
    }

    #[test]
    fn test_scatter_plot_too_small() {
        let result = ScatterPlot::new().points(&points()).dimensions(60, 60).build();
        assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_point_size_validated() {
        for size in [0.0, -4.0, f32::NAN, f32::INFINITY, 70_000.0, 321.0] {
            let result = ScatterPlot::new().points(&points()).size(size).build();
            assert!(matches!(result, Err(Error::InvalidPointSize(_))), "size {size}");
        }
        assert!(ScatterPlot::new().points(&points()).size(320.0).build().is_ok());
    }

    #[test]
    fn test_oversized_marker_renders_as_error() {
        // Unbuilt plots still refuse to rasterize an oversized marker
        let plot = ScatterPlot::new().points(&[Point { index: 0, value: 1 }]).size(70_000.0);
        assert!(matches!(plot.to_framebuffer(), Err(Error::InvalidPointSize(_))));
        assert!(plot.to_svg().is_err());
    }

    #[test]
    fn test_largest_marker_renders() {
        let plot = ScatterPlot::new()
            .points(&[Point { index: 0, value: 1 }])
            .size(320.0)
            .build()
            .unwrap();
        let fb = plot.to_framebuffer().unwrap();
        assert_eq!(fb.get_pixel(200, 200), Some(Rgba::MARKER));
    }

    #[test]
    fn test_markers_inside_plot_area() {
        let plot = ScatterPlot::new().points(&points()).build().unwrap();
        for (x, y) in plot.marker_positions().unwrap() {
            assert!((40.0..=360.0).contains(&x));
            assert!((40.0..=360.0).contains(&y));
        }
    }

    #[test]
    fn test_x_follows_index_order() {
        let plot = ScatterPlot::new().points(&points()).build().unwrap();
        let xs: Vec<f32> = plot.marker_positions().unwrap().iter().map(|p| p.0).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_hit_test_marker_centers() {
        let plot = ScatterPlot::new().points(&points()).build().unwrap();
        for (i, (x, y)) in plot.marker_positions().unwrap().into_iter().enumerate() {
            assert_eq!(plot.hit_test(x, y), Some(i));
            assert_eq!(plot.hit_test(x + 4.0, y - 4.0), Some(i));
        }
    }

    #[test]
    fn test_hit_test_empty_space() {
        let plot = ScatterPlot::new().points(&points()).build().unwrap();
        assert_eq!(plot.hit_test(0.0, 0.0), None);
    }

    #[test]
    fn test_single_point_is_centered() {
        let plot = ScatterPlot::new()
            .points(&[Point { index: 0, value: 4 }])
            .build()
            .unwrap();
        let (x, y) = plot.marker_positions().unwrap()[0];
        assert!((x - 200.0).abs() < 0.01);
        assert!((y - 200.0).abs() < 0.01);
    }

    #[test]
    fn test_render_draws_markers() {
        let plot = ScatterPlot::new().points(&points()).build().unwrap();
        let fb = plot.to_framebuffer().unwrap();

        let (x, y) = plot.marker_positions().unwrap()[1];
        assert_eq!(fb.get_pixel(x.round() as u32, y.round() as u32), Some(Rgba::MARKER));
        assert_eq!(fb.get_pixel(1, 1), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(40, 200), Some(Rgba::FRAME));
    }

    #[test]
    fn test_svg_has_one_marker_per_point() {
        let svg = ScatterPlot::new().points(&points()).build().unwrap().to_svg().unwrap().render();
        assert_eq!(svg.matches(r#"class="point""#).count(), 5);
        assert!(svg.contains(SCATTER_TITLE));
        assert!(svg.contains(r#"data-index="4""#));
    }

    #[test]
    fn test_with_dimensions() {
        let mut plot = ScatterPlot::new().points(&points());
        plot.set_dimensions(640, 480);
        assert_eq!(plot.width(), 640);
        assert_eq!(plot.height(), 480);
    }
}
