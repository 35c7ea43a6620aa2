//! Reference point selection.
//!
//! The reference points are the clickable dots of the scatter figure:
//! `index` is the x position and bank slot, `value` a decorative random
//! height in `[0, value_bound)`.

use crate::count::CountPolicy;
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Default number of reference points.
pub const DEFAULT_POINT_COUNT: i64 = 5;

/// Default exclusive upper bound for point values.
pub const DEFAULT_VALUE_BOUND: u32 = 20;

/// One clickable reference point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// 0-based position; also the bank slot the point selects.
    pub index: usize,
    /// Random height in `[0, value_bound)`.
    pub value: u32,
}

/// Builder for reference point sets.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceSelector {
    count: i64,
    value_bound: u32,
    count_policy: CountPolicy,
}

impl Default for ReferenceSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceSelector {
    /// Selector for five points with values in `[0, 20)`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            count: DEFAULT_POINT_COUNT,
            value_bound: DEFAULT_VALUE_BOUND,
            count_policy: CountPolicy::default(),
        }
    }

    /// Number of points to produce.
    #[must_use]
    pub fn count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Exclusive upper bound for point values.
    #[must_use]
    pub fn value_bound(mut self, bound: u32) -> Self {
        self.value_bound = bound;
        self
    }

    /// Policy for negative counts.
    #[must_use]
    pub fn count_policy(mut self, policy: CountPolicy) -> Self {
        self.count_policy = policy;
        self
    }

    /// Draw the points from `rng`.
    ///
    /// Indices are always `0..count` in order; each value is an independent
    /// uniform draw.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Point>> {
        if self.value_bound == 0 {
            return Err(Error::InvalidValueBound);
        }
        let count = self.count_policy.resolve(self.count)?;

        Ok((0..count)
            .map(|index| Point {
                index,
                value: rng.gen_range(0..self.value_bound),
            })
            .collect())
    }

    /// Draw the points from a generator seeded with `seed` (reproducible).
    pub fn select_seeded(&self, seed: u64) -> Result<Vec<Point>> {
        self.select(&mut StdRng::seed_from_u64(seed))
    }

    /// Draw the points from OS entropy (differs between runs).
    pub fn select_from_entropy(&self) -> Result<Vec<Point>> {
        self.select(&mut StdRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let points = ReferenceSelector::new().select_seeded(7).unwrap();
        assert_eq!(points.len(), 5);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.index, i);
            assert!(p.value < 20);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let selector = ReferenceSelector::new().count(50);
        assert_eq!(selector.select_seeded(42).unwrap(), selector.select_seeded(42).unwrap());
    }

    #[test]
    fn test_entropy_indices_are_stable() {
        let selector = ReferenceSelector::new().count(8);
        let a = selector.select_from_entropy().unwrap();
        let b = selector.select_from_entropy().unwrap();
        let idx = |ps: &[Point]| ps.iter().map(|p| p.index).collect::<Vec<_>>();
        assert_eq!(idx(&a), idx(&b));
    }

    #[test]
    fn test_entropy_values_differ_between_runs() {
        // 64 values in [0, 20): a collision is a 20^-64 event
        let selector = ReferenceSelector::new().count(64);
        let values = |ps: Vec<Point>| ps.into_iter().map(|p| p.value).collect::<Vec<_>>();
        let a = values(selector.select_from_entropy().unwrap());
        let b = values(selector.select_from_entropy().unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn test_seeds_give_different_values() {
        let selector = ReferenceSelector::new().count(64);
        assert_ne!(selector.select_seeded(1).unwrap(), selector.select_seeded(2).unwrap());
    }

    #[test]
    fn test_zero_count() {
        assert!(ReferenceSelector::new().count(0).select_seeded(1).unwrap().is_empty());
    }

    #[test]
    fn test_negative_count() {
        let strict = ReferenceSelector::new().count(-1);
        assert!(matches!(
            strict.select_seeded(1),
            Err(Error::InvalidCount { count: -1 })
        ));

        let lenient = strict.count_policy(CountPolicy::Saturating);
        assert!(lenient.select_seeded(1).unwrap().is_empty());
    }

    #[test]
    fn test_value_bound() {
        let points = ReferenceSelector::new()
            .count(200)
            .value_bound(3)
            .select_seeded(9)
            .unwrap();
        assert!(points.iter().all(|p| p.value < 3));

        let single = ReferenceSelector::new().value_bound(1).select_seeded(9).unwrap();
        assert!(single.iter().all(|p| p.value == 0));
    }

    #[test]
    fn test_zero_value_bound_rejected() {
        assert!(matches!(
            ReferenceSelector::new().value_bound(0).select_seeded(1),
            Err(Error::InvalidValueBound)
        ));
    }
}
