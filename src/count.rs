//! Handling of signed element counts at the API boundary.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// What a generator does when asked for a negative number of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountPolicy {
    /// Reject with [`Error::InvalidCount`].
    #[default]
    Strict,
    /// Treat as zero and produce an empty sequence.
    Saturating,
}

impl CountPolicy {
    /// Resolve a signed count to a length.
    pub fn resolve(self, count: i64) -> Result<usize> {
        match (self, usize::try_from(count)) {
            (_, Ok(n)) => Ok(n),
            (Self::Saturating, Err(_)) if count < 0 => Ok(0),
            _ => Err(Error::InvalidCount { count }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_counts_pass_through() {
        for policy in [CountPolicy::Strict, CountPolicy::Saturating] {
            assert_eq!(policy.resolve(0).unwrap(), 0);
            assert_eq!(policy.resolve(5).unwrap(), 5);
        }
    }

    #[test]
    fn test_strict_rejects_negative() {
        assert!(matches!(
            CountPolicy::Strict.resolve(-1),
            Err(Error::InvalidCount { count: -1 })
        ));
    }

    #[test]
    fn test_saturating_clamps_negative() {
        assert_eq!(CountPolicy::Saturating.resolve(-42).unwrap(), 0);
    }

    #[test]
    fn test_default_is_strict() {
        assert_eq!(CountPolicy::default(), CountPolicy::Strict);
    }
}
