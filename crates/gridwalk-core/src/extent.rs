//! Per-rank grid extents.

use crate::axis::Axis;
use crate::error::GridError;
use crate::index::IndexTriple;
use std::fmt;

/// Local (per-rank) size of a grid along the logical axes x, y, z.
///
/// Every extent is strictly positive; [`GridExtent::new`] is the only
/// constructor and rejects anything else.
///
/// # Examples
///
/// ```
/// use gridwalk_core::{Axis, GridError, GridExtent};
///
/// let e = GridExtent::new(4, 3, 2).unwrap();
/// assert_eq!(e.get(Axis::Y), 3);
/// assert_eq!(e.cell_count(), Some(24));
///
/// assert_eq!(
///     GridExtent::new(0, 1, 1),
///     Err(GridError::InvalidExtent { axis: Axis::X, value: 0 })
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridExtent {
    n: [i32; 3],
}

impl GridExtent {
    /// Validate and build an extent. Axes are checked in `x, y, z` order.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self, GridError> {
        let n = [x, y, z];
        for axis in Axis::ALL {
            let value = n[axis.slot()];
            if value <= 0 {
                return Err(GridError::InvalidExtent { axis, value });
            }
        }
        Ok(Self { n })
    }

    /// Extent along `axis`.
    pub const fn get(self, axis: Axis) -> i32 {
        self.n[axis.slot()]
    }

    /// Extent along x.
    pub const fn x(self) -> i32 {
        self.n[0]
    }

    /// Extent along y.
    pub const fn y(self) -> i32 {
        self.n[1]
    }

    /// Extent along z.
    pub const fn z(self) -> i32 {
        self.n[2]
    }

    /// Total cells, or `None` if the product overflows `usize`.
    pub fn cell_count(self) -> Option<usize> {
        self.n
            .iter()
            .try_fold(1usize, |acc, &v| acc.checked_mul(v as usize))
    }

    /// Whether every coordinate of `triple` lies in `[1, extent]`.
    pub fn contains(self, triple: IndexTriple) -> bool {
        Axis::ALL.iter().all(|&axis| {
            let c = triple.get(axis);
            c >= 1 && c <= self.get(axis)
        })
    }
}

impl fmt::Display for GridExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.n[0], self.n[1], self.n[2])
    }
}
