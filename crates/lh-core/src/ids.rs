use core::fmt;
use core::num::NonZeroU32;

use crate::error::{LhError, LhResult};

/// Defines a compact, stable identifier type.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
/// - each invocation yields a distinct type, so a line id can never be
///   handed to an API that expects a station id
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(NonZeroU32);

        impl $name {
            /// Create an id from a 0-based index by storing index+1.
            ///
            /// Panics if `index == u32::MAX`; use [`Self::try_from_index`] for
            /// indices that come from untrusted counts.
            pub fn from_index(index: u32) -> Self {
                Self::try_from_index(index as usize).expect("index+1 fits in u32")
            }

            /// Create an id from a 0-based `usize` index, failing if it does not fit.
            pub fn try_from_index(index: usize) -> LhResult<Self> {
                u32::try_from(index)
                    .ok()
                    .and_then(|i| i.checked_add(1))
                    .and_then(NonZeroU32::new)
                    .map(Self)
                    .ok_or(LhError::Capacity {
                        what: $label,
                        count: index,
                        max: u32::MAX as usize - 1,
                    })
            }

            /// Recover the 0-based index.
            pub fn index(self) -> u32 {
                self.0.get() - 1
            }

            /// The 0-based index as `usize`, for addressing dense matrices.
            pub fn slot(self) -> usize {
                self.index() as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.index())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.index())
            }
        }
    };
}

define_id!(
    /// Identifier of a transit line, assigned in first-seen order.
    LineId,
    "LineId"
);

define_id!(
    /// Identifier of a station, assigned in first-seen order across the whole input.
    StationId,
    "StationId"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            assert_eq!(LineId::from_index(i).index(), i);
            assert_eq!(StationId::from_index(i).slot(), i as usize);
        }
    }

    #[test]
    fn option_id_is_small() {
        assert_eq!(
            core::mem::size_of::<LineId>(),
            core::mem::size_of::<Option<LineId>>()
        );
        assert_eq!(
            core::mem::size_of::<StationId>(),
            core::mem::size_of::<Option<StationId>>()
        );
    }

    #[test]
    fn try_from_index_rejects_overflow() {
        let err = StationId::try_from_index(u32::MAX as usize).unwrap_err();
        assert!(matches!(err, LhError::Capacity { what: "StationId", .. }));
    }

    #[test]
    fn debug_names_the_id_space() {
        assert_eq!(format!("{:?}", LineId::from_index(3)), "LineId(3)");
        assert_eq!(format!("{:?}", StationId::from_index(3)), "StationId(3)");
    }
}
