//! Transfer-count ordinal.
//!
//! Distances are non-negative integers with a distinguished infinity. The
//! infinity is stored as a large finite `u32` so dense matrices stay `Copy`
//! and compact, but it never leaks out: [`Distance::plus`] absorbs it and the
//! output boundary goes through [`Transfers`].

use core::fmt;

/// Minimum number of line changes, or infinity when no path exists.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Distance(u32);

impl Distance {
    /// Same line, or same station.
    pub const ZERO: Distance = Distance(0);

    /// Two lines sharing a station.
    pub const ONE: Distance = Distance(1);

    /// Unreachable. `INFINITY + INFINITY` still fits in `u32`.
    pub const INFINITY: Distance = Distance(u32::MAX / 2);

    /// Largest finite transfer count this type can carry.
    pub const MAX_FINITE: u32 = u32::MAX / 2 - 1;

    /// Build a finite distance, saturating to [`Distance::INFINITY`].
    pub fn from_count(count: u32) -> Self {
        Self(count.min(Self::INFINITY.0))
    }

    pub fn is_finite(self) -> bool {
        self.0 < Self::INFINITY.0
    }

    /// The finite transfer count, or `None` when unreachable.
    pub fn get(self) -> Option<u32> {
        self.is_finite().then_some(self.0)
    }

    /// Path composition. Infinity is absorbing and finite sums saturate.
    pub fn plus(self, other: Distance) -> Distance {
        if !self.is_finite() || !other.is_finite() {
            return Self::INFINITY;
        }
        Self::from_count(self.0.saturating_add(other.0))
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(d) => write!(f, "Distance({d})"),
            None => write!(f, "Distance(inf)"),
        }
    }
}

/// Tagged outcome handed to consumers of a station matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transfers {
    Reachable(u32),
    Unreachable,
}

impl Transfers {
    pub fn count(self) -> Option<u32> {
        match self {
            Transfers::Reachable(d) => Some(d),
            Transfers::Unreachable => None,
        }
    }
}

impl From<Distance> for Transfers {
    fn from(d: Distance) -> Self {
        match d.get() {
            Some(count) => Transfers::Reachable(count),
            None => Transfers::Unreachable,
        }
    }
}

impl fmt::Display for Transfers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transfers::Reachable(d) => write!(f, "{d}"),
            Transfers::Unreachable => write!(f, "unreachable"),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_distance() -> impl Strategy<Value = Distance> {
        prop_oneof![
            (0_u32..1_000).prop_map(Distance::from_count),
            Just(Distance::INFINITY),
        ]
    }

    proptest! {
        #[test]
        fn plus_is_commutative(a in any_distance(), b in any_distance()) {
            prop_assert_eq!(a.plus(b), b.plus(a));
        }

        #[test]
        fn plus_never_shrinks(a in any_distance(), b in any_distance()) {
            let sum = a.plus(b);
            prop_assert!(sum >= a);
            prop_assert!(sum >= b);
        }
    }
}
