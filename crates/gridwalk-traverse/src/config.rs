//! Per-rank grid configuration and validation.
//!
//! [`RankConfig`] is plain data describing one rank's local slab in all
//! three grid representations. [`build()`](RankConfig::build) validates it
//! once and yields ready-to-use traversals.

use std::error::Error;
use std::fmt;

use crate::physical::{PhysicalGrid, PhysicalGrid0};
use crate::spectral::SpectralGrid;
use gridwalk_core::{Axis, Exclusion, GridError, GridKind};

// ── SpectralExtents ────────────────────────────────────────────────

/// Local extents and exclusions of the spectral grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpectralExtents {
    /// Extent along z.
    pub nz: i32,
    /// Extent of the half-spectrum y axis.
    pub ny_half: i32,
    /// Local extent along the decomposed x axis.
    pub nx_perproc: i32,
    /// Index to skip along z.
    pub iz_max: Exclusion,
    /// Index to skip along x.
    pub ix_max: Exclusion,
}

// ── PhysicalExtents ────────────────────────────────────────────────

/// Local extents of a physical grid (padded or unpadded).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysicalExtents {
    /// Extent along x.
    pub nx: i32,
    /// Local extent along the decomposed z axis.
    pub nz_perproc: i32,
    /// Extent along y.
    pub ny: i32,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`RankConfig::build()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// One grid's extents or exclusions were rejected.
    Grid {
        /// Which grid failed.
        kind: GridKind,
        /// The underlying validation error.
        error: GridError,
    },
    /// The padded physical grid is smaller than the unpadded one.
    PaddingSmallerThanGrid {
        /// The offending axis.
        axis: Axis,
        /// Padded extent.
        padded: i32,
        /// Unpadded extent.
        unpadded: i32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid { kind, error } => write!(f, "{kind} grid: {error}"),
            Self::PaddingSmallerThanGrid {
                axis,
                padded,
                unpadded,
            } => write!(
                f,
                "padded physical extent on axis {axis} ({padded}) is smaller than unpadded ({unpadded})"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid { error, .. } => Some(error),
            Self::PaddingSmallerThanGrid { .. } => None,
        }
    }
}

// ── RankConfig ─────────────────────────────────────────────────────

/// One rank's local extents for every grid representation.
///
/// Computed by the decomposition layer once per rank, and again only if
/// the decomposition changes.
///
/// # Examples
///
/// ```
/// use gridwalk_traverse::{Exclusion, PhysicalExtents, RankConfig, SpectralExtents, Traversal};
///
/// let cfg = RankConfig {
///     rank: 0,
///     spectral: SpectralExtents {
///         nz: 16,
///         ny_half: 9,
///         nx_perproc: 4,
///         iz_max: Exclusion::At(9),
///         ix_max: Exclusion::None,
///     },
///     physical: PhysicalExtents { nx: 24, nz_perproc: 6, ny: 24 },
///     physical0: PhysicalExtents { nx: 16, nz_perproc: 4, ny: 16 },
/// };
/// let grids = cfg.build().unwrap();
/// assert_eq!(grids.spectral.visit_count(), 15 * 9 * 4);
/// assert_eq!(grids.physical.visit_count(), 24 * 6 * 24);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankConfig {
    /// Rank that owns these extents.
    pub rank: u32,
    /// Spectral slab.
    pub spectral: SpectralExtents,
    /// Padded (dealiased) physical slab.
    pub physical: PhysicalExtents,
    /// Unpadded physical slab.
    pub physical0: PhysicalExtents,
}

/// Validated traversals for one rank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankGrids {
    /// Rank that owns these traversals.
    pub rank: u32,
    /// Spectral traversal.
    pub spectral: SpectralGrid,
    /// Padded physical traversal.
    pub physical: PhysicalGrid,
    /// Unpadded physical traversal.
    pub physical0: PhysicalGrid0,
}

impl RankConfig {
    /// Validate every grid and build its traversal.
    ///
    /// Grids are checked in the order spectral, physical, physical0; then
    /// the padded physical grid must be at least as large as the unpadded
    /// one on every axis.
    pub fn build(&self) -> Result<RankGrids, ConfigError> {
        let s = self.spectral;
        let spectral = SpectralGrid::new(s.nz, s.ny_half, s.nx_perproc, s.iz_max, s.ix_max)
            .map_err(|error| self.reject(GridKind::Spectral, error))?;

        let p = self.physical;
        let physical = PhysicalGrid::new(p.nx, p.nz_perproc, p.ny)
            .map_err(|error| self.reject(GridKind::Physical, error))?;

        let p0 = self.physical0;
        let physical0 = PhysicalGrid0::new(p0.nx, p0.nz_perproc, p0.ny)
            .map_err(|error| self.reject(GridKind::Physical0, error))?;

        for (axis, padded, unpadded) in [
            (Axis::X, p.nx, p0.nx),
            (Axis::Y, p.ny, p0.ny),
            (Axis::Z, p.nz_perproc, p0.nz_perproc),
        ] {
            if padded < unpadded {
                tracing::debug!(
                    rank = self.rank,
                    %axis,
                    padded,
                    unpadded,
                    "padded grid smaller than unpadded"
                );
                return Err(ConfigError::PaddingSmallerThanGrid {
                    axis,
                    padded,
                    unpadded,
                });
            }
        }

        Ok(RankGrids {
            rank: self.rank,
            spectral,
            physical,
            physical0,
        })
    }

    fn reject(&self, kind: GridKind, error: GridError) -> ConfigError {
        tracing::debug!(rank = self.rank, %kind, %error, "rank config rejected");
        ConfigError::Grid { kind, error }
    }
}
