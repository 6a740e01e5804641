use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Required number of hands or fingers for a gesture channel.
///
/// Serialized as a bare integer (`hands = 1`) or a two-element inclusive
/// range (`fingers = [2, 3]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CountConstraint {
    /// Count must equal this value.
    Exact(usize),
    /// Count must lie in `min..=max`.
    Range(usize, usize),
}

impl CountConstraint {
    /// Whether `count` satisfies the constraint.
    #[must_use]
    pub fn admits(self, count: usize) -> bool {
        match self {
            Self::Exact(n) => count == n,
            Self::Range(min, max) => min <= count && count <= max,
        }
    }
}

impl From<usize> for CountConstraint {
    fn from(n: usize) -> Self {
        Self::Exact(n)
    }
}

impl From<RangeInclusive<usize>> for CountConstraint {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::Range(*range.start(), *range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_admits_only_its_value() {
        let c = CountConstraint::Exact(2);
        assert!(!c.admits(1));
        assert!(c.admits(2));
        assert!(!c.admits(3));
    }

    #[test]
    fn range_boundaries_are_inclusive() {
        let c = CountConstraint::from(6_usize..=12);
        assert!(!c.admits(5));
        assert!(c.admits(6));
        assert!(c.admits(12));
        assert!(!c.admits(13));
    }

    #[test]
    fn range_starting_at_zero() {
        let c = CountConstraint::Range(0, 1);
        assert!(c.admits(0));
        assert!(c.admits(1));
        assert!(!c.admits(2));
    }

    #[test]
    fn integer_or_pair_in_toml() {
        #[derive(Deserialize)]
        struct Counts {
            hands: CountConstraint,
            fingers: CountConstraint,
        }
        let counts: Counts = toml::from_str("hands = 1\nfingers = [2, 3]").unwrap();
        assert_eq!(counts.hands, CountConstraint::Exact(1));
        assert_eq!(counts.fingers, CountConstraint::Range(2, 3));
    }
}
