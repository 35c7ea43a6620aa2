//! Points and images paired for presentation.

use crate::bank::ImageBank;
use crate::binding::ActiveImage;
use crate::error::{Error, Result};
use crate::selector::Point;

/// Reference points together with their index-aligned image bank.
///
/// Construction enforces `points.len() == bank.len()`, so every point has an
/// image to swap in.
#[derive(Debug, Clone)]
pub struct Scene {
    points: Vec<Point>,
    bank: ImageBank,
}

impl Scene {
    /// Pair points with a bank.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BankSizeMismatch`] if the lengths differ.
    pub fn new(points: Vec<Point>, bank: ImageBank) -> Result<Self> {
        if points.len() != bank.len() {
            return Err(Error::BankSizeMismatch {
                points: points.len(),
                images: bank.len(),
            });
        }
        Ok(Self { points, bank })
    }

    /// Reference points in index order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The image bank.
    #[must_use]
    pub fn bank(&self) -> &ImageBank {
        &self.bank
    }

    /// Fresh active-image slot showing image 0.
    pub fn active(&self) -> Result<ActiveImage<'_>> {
        ActiveImage::new(&self.bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::ImageBankGenerator;
    use crate::binding::SelectionBinding;
    use crate::selector::ReferenceSelector;

    #[test]
    fn test_scene_pairs_points_and_images() {
        let points = ReferenceSelector::new().select_seeded(3).unwrap();
        let bank = ImageBankGenerator::new().resolution(8).count(5).generate().unwrap();
        let scene = Scene::new(points, bank).unwrap();

        let mut active = scene.active().unwrap();
        let last = scene.points()[4];
        active.select_point(&last).unwrap();
        assert_eq!(active.image(), scene.bank().image(4).unwrap());
    }

    #[test]
    fn test_scene_size_mismatch() {
        let points = ReferenceSelector::new().select_seeded(3).unwrap();
        let bank = ImageBankGenerator::new().resolution(8).count(1).generate().unwrap();
        assert!(matches!(
            Scene::new(points, bank),
            Err(Error::BankSizeMismatch { points: 5, images: 1 })
        ));
    }

    #[test]
    fn test_empty_scene_has_no_active_image() {
        let scene = Scene::new(Vec::new(), ImageBank::default()).unwrap();
        assert!(scene.active().is_err());
    }
}
