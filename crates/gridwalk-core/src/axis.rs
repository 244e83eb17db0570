//! Logical axis and grid-kind tags.

use std::fmt;

/// One of the three logical axes of a grid.
///
/// Axes are logical, not storage order: the loop nest of each traversal
/// decides which axis varies slowest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Streamwise axis. Decomposed across ranks on the spectral grid.
    X,
    /// Spanwise axis. Stored as a half spectrum on the spectral grid.
    Y,
    /// Wall-normal axis. Decomposed across ranks on the physical grids.
    Z,
}

impl Axis {
    /// All axes in storage-slot order (`x`, `y`, `z`).
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Slot of this axis in `[x, y, z]` arrays.
    pub const fn slot(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Lower-case axis name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which grid representation a traversal walks.
///
/// Each kind has its own loop nest and its own decomposed axis, so the
/// kind travels with every grid type and shows up in logs and errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridKind {
    /// Wavenumber grid: x decomposed, y half-spectrum, optional Nyquist
    /// exclusions on z and x.
    Spectral,
    /// Padded (dealiased) physical grid: z decomposed, every cell visited.
    Physical,
    /// Unpadded physical grid: z decomposed, every cell visited.
    Physical0,
}

impl GridKind {
    /// The axis split across ranks for this grid kind.
    pub const fn decomposed_axis(self) -> Axis {
        match self {
            Self::Spectral => Axis::X,
            Self::Physical | Self::Physical0 => Axis::Z,
        }
    }
}

impl fmt::Display for GridKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spectral => f.write_str("spectral"),
            Self::Physical => f.write_str("physical"),
            Self::Physical0 => f.write_str("physical0"),
        }
    }
}
