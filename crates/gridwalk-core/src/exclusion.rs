//! Optional per-axis exclusion markers.

use crate::axis::Axis;
use crate::error::GridError;

/// A single index value to skip along one axis for a whole traversal.
///
/// Used to drop the Nyquist (highest-wavenumber) mode, or a rank-boundary
/// sentinel, from a spectral traversal. What the index *means* is up to
/// the caller; the traversal only skips it.
///
/// The solver convention writes "no exclusion" as `-1`; see
/// [`Exclusion::from_sentinel`].
///
/// # Examples
///
/// ```
/// use gridwalk_core::Exclusion;
///
/// assert_eq!(Exclusion::from_sentinel(-1), Exclusion::None);
/// assert_eq!(Exclusion::from_sentinel(4), Exclusion::At(4));
/// assert_eq!(Exclusion::At(4).to_sentinel(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Exclusion {
    /// Nothing is skipped on this axis.
    #[default]
    None,
    /// Skip the 1-based index held here.
    At(i32),
}

impl Exclusion {
    /// The value that stands for "no exclusion" in the sentinel convention.
    pub const SENTINEL: i32 = -1;

    /// Decode the sentinel convention: `-1` disables the exclusion, any
    /// other value is an active exclusion (and is range-checked later).
    pub const fn from_sentinel(value: i32) -> Self {
        if value == Self::SENTINEL {
            Self::None
        } else {
            Self::At(value)
        }
    }

    /// Encode back to the sentinel convention.
    pub const fn to_sentinel(self) -> i32 {
        match self {
            Self::None => Self::SENTINEL,
            Self::At(i) => i,
        }
    }

    /// The excluded index, if active.
    pub const fn index(self) -> Option<i32> {
        match self {
            Self::None => None,
            Self::At(i) => Some(i),
        }
    }

    /// Whether an index is excluded.
    pub const fn is_active(self) -> bool {
        matches!(self, Self::At(_))
    }

    /// Whether `coord` is the excluded index.
    pub const fn skips(self, coord: i32) -> bool {
        match self {
            Self::None => false,
            Self::At(i) => i == coord,
        }
    }

    /// Check an active exclusion lies in `[1, extent]` for `axis`.
    pub fn check(self, axis: Axis, extent: i32) -> Result<Self, GridError> {
        match self {
            Self::At(value) if value < 1 || value > extent => Err(GridError::InvalidExclusion {
                axis,
                value,
                extent,
            }),
            _ => Ok(self),
        }
    }
}

impl From<Option<i32>> for Exclusion {
    fn from(v: Option<i32>) -> Self {
        match v {
            Some(i) => Self::At(i),
            None => Self::None,
        }
    }
}

/// Decodes the sentinel convention, as [`Exclusion::from_sentinel`].
impl From<i32> for Exclusion {
    fn from(v: i32) -> Self {
        Self::from_sentinel(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_minus_one_is_the_sentinel() {
        assert_eq!(Exclusion::from_sentinel(-1), Exclusion::None);
        assert_eq!(Exclusion::from_sentinel(0), Exclusion::At(0));
        assert_eq!(Exclusion::from_sentinel(-2), Exclusion::At(-2));
        assert_eq!(Exclusion::None.to_sentinel(), -1);
    }

    #[test]
    fn check_accepts_bounds_inclusive() {
        assert_eq!(Exclusion::At(1).check(Axis::X, 4), Ok(Exclusion::At(1)));
        assert_eq!(Exclusion::At(4).check(Axis::X, 4), Ok(Exclusion::At(4)));
        assert_eq!(Exclusion::None.check(Axis::X, 4), Ok(Exclusion::None));
    }

    #[test]
    fn check_rejects_out_of_range() {
        assert_eq!(
            Exclusion::At(5).check(Axis::Z, 3),
            Err(GridError::InvalidExclusion {
                axis: Axis::Z,
                value: 5,
                extent: 3
            })
        );
        assert!(Exclusion::At(0).check(Axis::Z, 3).is_err());
        assert!(Exclusion::from_sentinel(-7).check(Axis::X, 3).is_err());
    }

    #[test]
    fn skips_only_the_active_index() {
        assert!(Exclusion::At(2).skips(2));
        assert!(!Exclusion::At(2).skips(3));
        assert!(!Exclusion::None.skips(-1));
        assert_eq!(Exclusion::from(Some(3)).index(), Some(3));
        assert!(!Exclusion::from(None).is_active());
    }
}
