//! One-call traversal entry points.
//!
//! Each function validates its extents (and exclusions) at entry, fails
//! before calling `action` if they are rejected, then visits every cell in
//! the grid kind's fixed order. The first error returned by `action` stops
//! the walk and comes back as [`TraversalError::Action`].

use crate::physical::{PhysicalGrid, PhysicalGrid0};
use crate::spectral::SpectralGrid;
use crate::traversal::Traversal;
use gridwalk_core::{IndexTriple, TraversalError};

/// Walk a rank's spectral slab: z, then half-spectrum y, then per-rank x.
///
/// `iz_max` and `ix_max` use the solver's sentinel convention: `-1`
/// disables the exclusion, anything else must lie in `[1, extent]`.
///
/// # Examples
///
/// ```
/// use gridwalk_traverse::{spectral_iterate, GridError, TraversalError};
///
/// let res = spectral_iterate(3, 1, 1, 5, -1, |_| Ok::<(), ()>(()));
/// assert!(matches!(
///     res,
///     Err(TraversalError::Grid(GridError::InvalidExclusion { value: 5, .. }))
/// ));
/// ```
pub fn spectral_iterate<E, F>(
    nz: i32,
    ny_half: i32,
    nx_perproc: i32,
    iz_max: i32,
    ix_max: i32,
    action: F,
) -> Result<(), TraversalError<E>>
where
    F: FnMut(IndexTriple) -> Result<(), E>,
{
    let grid = SpectralGrid::from_sentinels(nz, ny_half, nx_perproc, iz_max, ix_max)?;
    grid.try_for_each(action).map_err(TraversalError::Action)
}

/// Walk a rank's padded physical slab: x, then per-rank z, then y.
pub fn physical_iterate<E, F>(
    nxx: i32,
    nzz_perproc: i32,
    nyy: i32,
    action: F,
) -> Result<(), TraversalError<E>>
where
    F: FnMut(IndexTriple) -> Result<(), E>,
{
    let grid = PhysicalGrid::new(nxx, nzz_perproc, nyy)?;
    grid.try_for_each(action).map_err(TraversalError::Action)
}

/// Walk a rank's unpadded physical slab: x, then per-rank z, then y.
pub fn physical_iterate0<E, F>(
    nx: i32,
    nz_perproc: i32,
    ny: i32,
    action: F,
) -> Result<(), TraversalError<E>>
where
    F: FnMut(IndexTriple) -> Result<(), E>,
{
    let grid = PhysicalGrid0::new(nx, nz_perproc, ny)?;
    grid.try_for_each(action).map_err(TraversalError::Action)
}
