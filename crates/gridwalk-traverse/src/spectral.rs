//! Spectral (wavenumber) grid traversal.

use crate::nest::{AxisExclusions, LoopNest};
use crate::plan::TraversalPlan;
use crate::traversal::Traversal;
use gridwalk_core::{Axis, Exclusion, GridError, GridExtent, GridKind};

/// A rank's local slab of the spectral grid.
///
/// Loop nest: z in `1..=nz` (outer), half-spectrum y in `1..=ny_half`,
/// per-rank x in `1..=nx_perproc` (inner). `iz_max` and `ix_max` each
/// drop one index from their axis; y is never trimmed because the
/// half-spectrum storage already accounts for conjugate symmetry.
///
/// # Examples
///
/// ```
/// use gridwalk_traverse::{Exclusion, SpectralGrid, Traversal};
///
/// let g = SpectralGrid::new(8, 5, 4, Exclusion::At(5), Exclusion::None).unwrap();
/// assert_eq!(g.visit_count(), 7 * 5 * 4);
/// assert!(g.iter().all(|t| t.iz != 5));
///
/// // Out-of-range exclusions are rejected rather than silently ignored.
/// assert!(SpectralGrid::new(3, 1, 1, Exclusion::At(5), Exclusion::None).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpectralGrid {
    plan: TraversalPlan,
}

impl SpectralGrid {
    /// Validate extents and exclusions and build the traversal.
    ///
    /// Returns `Err(GridError::InvalidExtent)` for a non-positive extent,
    /// `Err(GridError::InvalidExclusion)` for an active exclusion outside
    /// its axis range.
    pub fn new(
        nz: i32,
        ny_half: i32,
        nx_perproc: i32,
        iz_max: Exclusion,
        ix_max: Exclusion,
    ) -> Result<Self, GridError> {
        let extent = GridExtent::new(nx_perproc, ny_half, nz)?;
        let exclusions = AxisExclusions::none()
            .with(Axis::Z, iz_max)
            .with(Axis::X, ix_max);
        let plan = TraversalPlan::new(LoopNest::SPECTRAL, extent, exclusions)?;
        Ok(Self { plan })
    }

    /// As [`new`](Self::new), with exclusions in the `-1`-means-none
    /// sentinel convention.
    pub fn from_sentinels(
        nz: i32,
        ny_half: i32,
        nx_perproc: i32,
        iz_max: i32,
        ix_max: i32,
    ) -> Result<Self, GridError> {
        Self::new(
            nz,
            ny_half,
            nx_perproc,
            Exclusion::from_sentinel(iz_max),
            Exclusion::from_sentinel(ix_max),
        )
    }

    /// Extent along z.
    pub fn nz(&self) -> i32 {
        self.plan.extent().z()
    }

    /// Extent of the half-spectrum y axis.
    pub fn ny_half(&self) -> i32 {
        self.plan.extent().y()
    }

    /// Local extent along the decomposed x axis.
    pub fn nx_perproc(&self) -> i32 {
        self.plan.extent().x()
    }

    /// Exclusion on z.
    pub fn iz_max(&self) -> Exclusion {
        self.plan.exclusions().get(Axis::Z)
    }

    /// Exclusion on x.
    pub fn ix_max(&self) -> Exclusion {
        self.plan.exclusions().get(Axis::X)
    }
}

impl Traversal for SpectralGrid {
    fn kind(&self) -> GridKind {
        GridKind::Spectral
    }

    fn plan(&self) -> &TraversalPlan {
        &self.plan
    }
}
