//! Image bank generation.
//!
//! The bank is the ordered collection of images a selection can swap in:
//! slot `k` holds the sine field for `k` (see [`ScalarField::sine`]) rendered
//! through a [`FieldImage`]. Generation involves no randomness, so the same
//! parameters always produce bit-identical pixels.

use crate::colormap::{Colormap, Palette};
use crate::count::CountPolicy;
use crate::error::{Error, Result};
use crate::field::ScalarField;
use crate::framebuffer::Framebuffer;
use crate::grid::{SamplingGrid, DEFAULT_DOMAIN, DEFAULT_RESOLUTION};
use crate::plots::{FieldImage, Normalization};

/// Default number of bank images.
pub const DEFAULT_IMAGE_COUNT: i64 = 1;

/// Ordered, immutable collection of bank images.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageBank {
    images: Vec<Framebuffer>,
}

impl ImageBank {
    /// Wrap already rendered images.
    #[must_use]
    pub fn from_images(images: Vec<Framebuffer>) -> Self {
        Self { images }
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the bank holds no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Framebuffer> {
        self.images.get(index)
    }

    /// Image at `index`, or [`Error::IndexOutOfRange`].
    pub fn image(&self, index: usize) -> Result<&Framebuffer> {
        self.images.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.images.len(),
        })
    }

    /// All images in slot order.
    #[must_use]
    pub fn images(&self) -> &[Framebuffer] {
        &self.images
    }

    /// Iterate over the images in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Framebuffer> {
        self.images.iter()
    }
}

impl<'a> IntoIterator for &'a ImageBank {
    type Item = &'a Framebuffer;
    type IntoIter = std::slice::Iter<'a, Framebuffer>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

/// Builder for [`ImageBank`]s.
///
/// # Example
///
/// ```
/// use trueno_imgswap::bank::ImageBankGenerator;
///
/// let bank = ImageBankGenerator::new().resolution(16).count(3).generate().unwrap();
/// assert_eq!(bank.len(), 3);
/// assert_eq!(bank.image(2).unwrap().shape(), (16, 16, 4));
/// ```
#[derive(Debug, Clone)]
pub struct ImageBankGenerator {
    count: i64,
    resolution: usize,
    domain: (f64, f64),
    renderer: FieldImage,
    count_policy: CountPolicy,
}

impl Default for ImageBankGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBankGenerator {
    /// Generator for one image on the default 1000x1000 grid over `[0, 2]`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            count: DEFAULT_IMAGE_COUNT,
            resolution: DEFAULT_RESOLUTION,
            domain: DEFAULT_DOMAIN,
            renderer: FieldImage::new(),
            count_policy: CountPolicy::default(),
        }
    }

    /// Number of images to generate.
    #[must_use]
    pub fn count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Samples per axis (image width and height in pixels).
    #[must_use]
    pub fn resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sampling domain on both axes.
    #[must_use]
    pub fn domain(mut self, start: f64, end: f64) -> Self {
        self.domain = (start, end);
        self
    }

    /// Built-in palette for the false-color conversion.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.renderer = self.renderer.palette(palette);
        self
    }

    /// Custom colormap for the false-color conversion.
    #[must_use]
    pub fn colormap(mut self, colormap: Colormap) -> Self {
        self.renderer = self.renderer.colormap(colormap);
        self
    }

    /// Normalization applied before color lookup.
    #[must_use]
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.renderer = self.renderer.normalization(normalization);
        self
    }

    /// Policy for negative counts.
    #[must_use]
    pub fn count_policy(mut self, policy: CountPolicy) -> Self {
        self.count_policy = policy;
        self
    }

    /// The renderer used for each slot.
    #[must_use]
    pub fn renderer(&self) -> &FieldImage {
        &self.renderer
    }

    /// The sampling grid every slot is evaluated on.
    pub fn grid(&self) -> Result<SamplingGrid> {
        SamplingGrid::square(self.resolution, self.domain)
    }

    /// Render the image for bank slot `k`.
    pub fn generate_image(&self, k: usize) -> Result<Framebuffer> {
        let grid = self.grid()?;
        self.render_slot(&grid, k)
    }

    fn render_slot(&self, grid: &SamplingGrid, k: usize) -> Result<Framebuffer> {
        let field = ScalarField::sine(grid, k);
        let bad = field.non_finite_count();
        if bad > 0 {
            log::warn!("bank slot {k}: {bad} samples overflowed and render as the bad color");
        }

        let image = self.renderer.render(&field)?;
        if log::log_enabled!(log::Level::Debug) {
            let (min, max, mean) = image.luminance_stats();
            log::debug!(
                "bank slot {k}: {}x{} luminance min={min:.1} max={max:.1} mean={mean:.1}",
                image.width(),
                image.height()
            );
        }
        Ok(image)
    }

    /// Generate the configured number of images, slot `k` for `k` in `0..count`.
    ///
    /// A count of zero yields an empty bank. Negative counts follow the
    /// configured [`CountPolicy`].
    pub fn generate(&self) -> Result<ImageBank> {
        let count = self.count_policy.resolve(self.count)?;
        if count == 0 {
            return Ok(ImageBank::default());
        }

        let grid = self.grid()?;
        let images = (0..count)
            .map(|k| self.render_slot(&grid, k))
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "generated image bank: {} images at {}x{}",
            images.len(),
            grid.resolution(),
            grid.resolution()
        );
        Ok(ImageBank::from_images(images))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn small() -> ImageBankGenerator {
        ImageBankGenerator::new().resolution(24)
    }

    #[test]
    fn test_generate_count_and_shape() {
        let bank = small().count(5).generate().unwrap();
        assert_eq!(bank.len(), 5);
        for image in &bank {
            assert_eq!(image.shape(), (24, 24, 4));
        }
    }

    #[test]
    fn test_default_count_is_one() {
        let bank = small().generate().unwrap();
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_generate_zero_is_empty() {
        let bank = small().count(0).generate().unwrap();
        assert!(bank.is_empty());
    }

    #[test]
    fn test_negative_count_policies() {
        assert!(matches!(
            small().count(-2).generate(),
            Err(Error::InvalidCount { count: -2 })
        ));
        let bank = small()
            .count_policy(CountPolicy::Saturating)
            .count(-2)
            .generate()
            .unwrap();
        assert!(bank.is_empty());
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = small().count(3).generate().unwrap();
        let b = small().count(3).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_slots_differ() {
        let bank = small().count(2).generate().unwrap();
        assert_ne!(bank.image(0).unwrap(), bank.image(1).unwrap());
    }

    #[test]
    fn test_generate_image_matches_bank_slot() {
        let generator = small();
        let bank = generator.clone().count(4).generate().unwrap();
        assert_eq!(&generator.generate_image(3).unwrap(), bank.image(3).unwrap());
    }

    #[test]
    fn test_first_image_origin_pixel() {
        let bank = small().count(1).generate().unwrap();
        let origin = bank.image(0).unwrap().get_pixel(0, 0);
        assert_eq!(origin, Some(Colormap::default().map(0.5)));
        assert_eq!(origin, Some(Rgba::rgb(33, 145, 140)));
    }

    #[test]
    fn test_image_out_of_range() {
        let bank = small().count(2).generate().unwrap();
        assert!(matches!(
            bank.image(2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(bank.get(2).is_none());
    }

    #[test]
    fn test_invalid_resolution() {
        assert!(matches!(
            ImageBankGenerator::new().resolution(0).count(1).generate(),
            Err(Error::InvalidResolution(0))
        ));
        // No grid is built for an empty bank
        assert!(ImageBankGenerator::new().resolution(0).count(0).generate().is_ok());
    }

    #[test]
    fn test_palette_changes_pixels() {
        let viridis = small().count(1).generate().unwrap();
        let magma = small().palette(Palette::Magma).count(1).generate().unwrap();
        assert_ne!(viridis, magma);
    }
}
