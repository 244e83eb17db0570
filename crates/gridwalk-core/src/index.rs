//! The per-cell index triple.

use crate::axis::Axis;
use std::fmt;

/// A 1-based `(ix, iy, iz)` cell coordinate handed to per-cell actions.
///
/// Coordinates are logical: `ix` is always the x index, regardless of
/// which axis the traversal varies fastest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexTriple {
    /// Index along x.
    pub ix: i32,
    /// Index along y.
    pub iy: i32,
    /// Index along z.
    pub iz: i32,
}

impl IndexTriple {
    /// Build a triple from its x, y, z indices.
    pub const fn new(ix: i32, iy: i32, iz: i32) -> Self {
        Self { ix, iy, iz }
    }

    /// Index along `axis`.
    pub const fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.ix,
            Axis::Y => self.iy,
            Axis::Z => self.iz,
        }
    }

    /// Overwrite the index along `axis`.
    pub fn set(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::X => self.ix = value,
            Axis::Y => self.iy = value,
            Axis::Z => self.iz = value,
        }
    }

    /// `[ix, iy, iz]`.
    pub const fn to_array(self) -> [i32; 3] {
        [self.ix, self.iy, self.iz]
    }
}

impl From<[i32; 3]> for IndexTriple {
    fn from([ix, iy, iz]: [i32; 3]) -> Self {
        Self { ix, iy, iz }
    }
}

impl From<(i32, i32, i32)> for IndexTriple {
    fn from((ix, iy, iz): (i32, i32, i32)) -> Self {
        Self { ix, iy, iz }
    }
}

impl fmt::Display for IndexTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.ix, self.iy, self.iz)
    }
}
