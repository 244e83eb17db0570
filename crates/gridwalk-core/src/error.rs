//! Error types for grid validation and traversal.
//!
//! Validation errors ([`GridError`]) are raised once, before any cell is
//! visited. [`TraversalError`] adds the caller's own action error, which is
//! carried through unmodified.

use crate::axis::Axis;
use crate::extent::GridExtent;
use std::error::Error;
use std::fmt;

/// Errors detected while validating extents and exclusions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// An extent is zero or negative.
    InvalidExtent {
        /// The offending axis.
        axis: Axis,
        /// The rejected extent.
        value: i32,
    },
    /// An active exclusion lies outside `[1, extent]` for its axis.
    InvalidExclusion {
        /// The offending axis.
        axis: Axis,
        /// The rejected exclusion index.
        value: i32,
        /// Extent of that axis.
        extent: i32,
    },
    /// The number of visited cells does not fit in `usize`.
    CellCountOverflow {
        /// The extent whose product overflowed.
        extent: GridExtent,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { axis, value } => {
                write!(f, "invalid extent on axis {axis}: {value} (must be positive)")
            }
            Self::InvalidExclusion {
                axis,
                value,
                extent,
            } => {
                write!(
                    f,
                    "invalid exclusion on axis {axis}: {value} outside [1, {extent}]"
                )
            }
            Self::CellCountOverflow { extent } => {
                write!(f, "cell count of extent {extent} overflows usize")
            }
        }
    }
}

impl Error for GridError {}

/// Error returned by a traversal driven with a fallible action.
///
/// `E` is the action's own error type; it is returned as-is inside
/// [`TraversalError::Action`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraversalError<E> {
    /// Extents or exclusions were rejected before any cell was visited.
    Grid(GridError),
    /// The per-cell action failed; the remaining cells were not visited.
    Action(E),
}

impl<E> TraversalError<E> {
    /// The action error, if the traversal was aborted by its action.
    pub fn into_action(self) -> Option<E> {
        match self {
            Self::Action(e) => Some(e),
            Self::Grid(_) => None,
        }
    }

    /// The validation error, if the traversal never started.
    pub fn as_grid(&self) -> Option<&GridError> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Action(_) => None,
        }
    }
}

impl<E> From<GridError> for TraversalError<E> {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl<E: fmt::Display> fmt::Display for TraversalError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "{e}"),
            Self::Action(e) => write!(f, "cell action failed: {e}"),
        }
    }
}

impl<E: Error + 'static> Error for TraversalError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Action(e) => Some(e),
        }
    }
}
