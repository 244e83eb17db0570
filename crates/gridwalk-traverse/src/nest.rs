//! Loop-nest axis order and per-axis exclusions.

use gridwalk_core::{Axis, Exclusion};
use std::fmt;

/// The axis order of a triple loop, outermost (slowest) first.
///
/// Every axis appears exactly once. Downstream buffer layouts depend on
/// this order, so it is part of a plan's identity.
///
/// # Examples
///
/// ```
/// use gridwalk_traverse::{Axis, LoopNest};
///
/// assert_eq!(LoopNest::SPECTRAL.axes(), [Axis::Z, Axis::Y, Axis::X]);
/// assert!(LoopNest::new(Axis::X, Axis::X, Axis::Y).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoopNest {
    axes: [Axis; 3],
}

impl LoopNest {
    /// Spectral grids: z, then half-spectrum y, then per-rank x.
    pub const SPECTRAL: LoopNest = LoopNest {
        axes: [Axis::Z, Axis::Y, Axis::X],
    };

    /// Physical grids: x, then per-rank z, then y.
    pub const PHYSICAL: LoopNest = LoopNest {
        axes: [Axis::X, Axis::Z, Axis::Y],
    };

    /// Build a nest from outer, middle and inner axes.
    ///
    /// Returns `None` unless the three axes are distinct.
    pub fn new(outer: Axis, middle: Axis, inner: Axis) -> Option<Self> {
        if outer == middle || outer == inner || middle == inner {
            return None;
        }
        Some(Self {
            axes: [outer, middle, inner],
        })
    }

    /// Axes outermost first.
    pub const fn axes(self) -> [Axis; 3] {
        self.axes
    }

    /// The slowest-varying axis.
    pub const fn outer(self) -> Axis {
        self.axes[0]
    }

    /// The fastest-varying axis.
    pub const fn inner(self) -> Axis {
        self.axes[2]
    }
}

impl fmt::Display for LoopNest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.axes;
        write!(f, "{a}>{b}>{c}")
    }
}

/// One optional [`Exclusion`] per logical axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AxisExclusions {
    by_slot: [Exclusion; 3],
}

impl AxisExclusions {
    /// No exclusion on any axis.
    pub const fn none() -> Self {
        Self {
            by_slot: [Exclusion::None; 3],
        }
    }

    /// Copy of `self` with `axis` set to `exclusion`.
    pub fn with(mut self, axis: Axis, exclusion: Exclusion) -> Self {
        self.by_slot[axis.slot()] = exclusion;
        self
    }

    /// Exclusion on `axis`.
    pub const fn get(self, axis: Axis) -> Exclusion {
        self.by_slot[axis.slot()]
    }

    /// Whether any axis carries an active exclusion.
    pub fn any_active(self) -> bool {
        self.by_slot.iter().any(|e| e.is_active())
    }
}
