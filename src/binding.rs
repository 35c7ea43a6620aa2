//! Selection-to-image binding.
//!
//! [`ActiveImage`] is the single displayed-image slot. It is owned by the
//! presentation layer and borrows the bank it swaps images from; selecting
//! point `i` replaces the slot with bank image `i`. There is no history.
//!
//! Out-of-range selections are rejected with [`Error::IndexOutOfRange`] and
//! leave the slot unchanged; they are never clamped.

use crate::bank::ImageBank;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::selector::Point;

/// Contract every UI layer (HTML handler, native hit test, test harness)
/// drives when the user selects a point.
pub trait SelectionBinding {
    /// Swap to the image for point index `index`.
    fn select(&mut self, index: usize) -> Result<()>;

    /// Swap to the image bound to `point`.
    fn select_point(&mut self, point: &Point) -> Result<()> {
        self.select(point.index)
    }

    /// Apply a tap-tool selection set: the first selected index wins.
    ///
    /// An empty set (a tap on empty space) changes nothing and returns
    /// `Ok(false)`.
    fn select_from_indices(&mut self, selected: &[usize]) -> Result<bool> {
        match selected.first() {
            Some(&index) => self.select(index).map(|()| true),
            None => Ok(false),
        }
    }
}

/// The currently displayed image of a bank.
#[derive(Debug, Clone, Copy)]
pub struct ActiveImage<'a> {
    bank: &'a ImageBank,
    index: usize,
}

impl<'a> ActiveImage<'a> {
    /// Start at bank image 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBank`] if the bank has no images.
    pub fn new(bank: &'a ImageBank) -> Result<Self> {
        if bank.is_empty() {
            return Err(Error::EmptyBank);
        }
        Ok(Self { bank, index: 0 })
    }

    /// Bank slot currently displayed.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The displayed image.
    #[must_use]
    pub fn image(&self) -> &'a Framebuffer {
        &self.bank.images()[self.index]
    }

    /// The bank images are swapped from.
    #[must_use]
    pub const fn bank(&self) -> &'a ImageBank {
        self.bank
    }
}

impl SelectionBinding for ActiveImage<'_> {
    fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.bank.len() {
            log::warn!(
                "ignoring selection {index}: image bank holds {} images",
                self.bank.len()
            );
            return Err(Error::IndexOutOfRange {
                index,
                len: self.bank.len(),
            });
        }
        log::debug!("active image {} -> {index}", self.index);
        self.index = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::ImageBankGenerator;

    fn bank(n: i64) -> ImageBank {
        ImageBankGenerator::new().resolution(8).count(n).generate().unwrap()
    }

    #[test]
    fn test_starts_at_first_image() {
        let bank = bank(5);
        let active = ActiveImage::new(&bank).unwrap();
        assert_eq!(active.index(), 0);
        assert_eq!(active.image(), bank.image(0).unwrap());
    }

    #[test]
    fn test_empty_bank_rejected() {
        let bank = ImageBank::default();
        assert!(matches!(ActiveImage::new(&bank), Err(Error::EmptyBank)));
    }

    #[test]
    fn test_select_in_range() {
        let bank = bank(5);
        let mut active = ActiveImage::new(&bank).unwrap();
        active.select(2).unwrap();
        assert_eq!(active.index(), 2);
        assert_eq!(active.image(), bank.image(2).unwrap());
    }

    #[test]
    fn test_select_out_of_range_keeps_image() {
        let bank = bank(5);
        let mut active = ActiveImage::new(&bank).unwrap();
        active.select(3).unwrap();

        let err = active.select(7).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 7, len: 5 }));
        assert_eq!(active.index(), 3);
    }

    #[test]
    fn test_select_point() {
        let bank = bank(3);
        let mut active = ActiveImage::new(&bank).unwrap();
        active.select_point(&Point { index: 1, value: 17 }).unwrap();
        assert_eq!(active.index(), 1);
    }

    #[test]
    fn test_select_from_indices() {
        let bank = bank(4);
        let mut active = ActiveImage::new(&bank).unwrap();

        assert!(!active.select_from_indices(&[]).unwrap());
        assert_eq!(active.index(), 0);

        assert!(active.select_from_indices(&[3, 1]).unwrap());
        assert_eq!(active.index(), 3);

        assert!(active.select_from_indices(&[9]).is_err());
        assert_eq!(active.index(), 3);
    }

    #[test]
    fn test_no_history() {
        let bank = bank(3);
        let mut active = ActiveImage::new(&bank).unwrap();
        active.select(1).unwrap();
        active.select(2).unwrap();
        active.select(0).unwrap();
        assert_eq!(active.image(), bank.image(0).unwrap());
    }
}
