//! Physical-space grid traversals (padded and unpadded).

use crate::nest::{AxisExclusions, LoopNest};
use crate::plan::TraversalPlan;
use crate::traversal::Traversal;
use gridwalk_core::{GridError, GridExtent, GridKind};

/// Plan shared by both physical grids: x outer, per-rank z, y inner,
/// every cell visited.
fn physical_plan(nx: i32, nz_local: i32, ny: i32) -> Result<TraversalPlan, GridError> {
    let extent = GridExtent::new(nx, ny, nz_local)?;
    TraversalPlan::new(LoopNest::PHYSICAL, extent, AxisExclusions::none())
}

/// A rank's local slab of the padded (dealiased) physical grid.
///
/// Loop nest: x in `1..=nxx` (outer), per-rank z in `1..=nzz_perproc`,
/// y in `1..=nyy` (inner). Physical grids have no Nyquist mode, so no
/// index is ever skipped.
///
/// # Examples
///
/// ```
/// use gridwalk_traverse::{PhysicalGrid, Traversal};
///
/// let g = PhysicalGrid::new(6, 2, 6).unwrap();
/// assert_eq!(g.visit_count(), 72);
/// assert!(PhysicalGrid::new(0, 1, 1).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhysicalGrid {
    plan: TraversalPlan,
}

impl PhysicalGrid {
    /// Validate extents and build the traversal.
    ///
    /// Returns `Err(GridError::InvalidExtent)` for a non-positive extent.
    pub fn new(nxx: i32, nzz_perproc: i32, nyy: i32) -> Result<Self, GridError> {
        Ok(Self {
            plan: physical_plan(nxx, nzz_perproc, nyy)?,
        })
    }

    /// Padded extent along x.
    pub fn nxx(&self) -> i32 {
        self.plan.extent().x()
    }

    /// Local padded extent along the decomposed z axis.
    pub fn nzz_perproc(&self) -> i32 {
        self.plan.extent().z()
    }

    /// Padded extent along y.
    pub fn nyy(&self) -> i32 {
        self.plan.extent().y()
    }
}

impl Traversal for PhysicalGrid {
    fn kind(&self) -> GridKind {
        GridKind::Physical
    }

    fn plan(&self) -> &TraversalPlan {
        &self.plan
    }
}

/// A rank's local slab of the unpadded physical grid.
///
/// Same nest as [`PhysicalGrid`] over the physically meaningful subset:
/// x in `1..=nx`, per-rank z in `1..=nz_perproc`, y in `1..=ny`. Used for
/// output and diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhysicalGrid0 {
    plan: TraversalPlan,
}

impl PhysicalGrid0 {
    /// Validate extents and build the traversal.
    pub fn new(nx: i32, nz_perproc: i32, ny: i32) -> Result<Self, GridError> {
        Ok(Self {
            plan: physical_plan(nx, nz_perproc, ny)?,
        })
    }

    /// Extent along x.
    pub fn nx(&self) -> i32 {
        self.plan.extent().x()
    }

    /// Local extent along the decomposed z axis.
    pub fn nz_perproc(&self) -> i32 {
        self.plan.extent().z()
    }

    /// Extent along y.
    pub fn ny(&self) -> i32 {
        self.plan.extent().y()
    }
}

impl Traversal for PhysicalGrid0 {
    fn kind(&self) -> GridKind {
        GridKind::Physical0
    }

    fn plan(&self) -> &TraversalPlan {
        &self.plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use gridwalk_core::{Axis, IndexTriple};
    use proptest::prelude::*;

    #[test]
    fn zero_nxx_rejected_before_any_visit() {
        assert_eq!(
            PhysicalGrid::new(0, 1, 1),
            Err(GridError::InvalidExtent {
                axis: Axis::X,
                value: 0
            })
        );
        assert!(matches!(
            PhysicalGrid0::new(2, -4, 2),
            Err(GridError::InvalidExtent { axis: Axis::Z, value: -4 })
        ));
    }

    #[test]
    fn order_is_x_then_z_then_y() {
        let g = PhysicalGrid::new(2, 2, 3).unwrap();
        let seq = g.ordering();
        assert_eq!(seq[0], IndexTriple::new(1, 1, 1));
        assert_eq!(seq[1], IndexTriple::new(1, 2, 1));
        assert_eq!(seq[2], IndexTriple::new(1, 3, 1));
        assert_eq!(seq[3], IndexTriple::new(1, 1, 2));
        assert_eq!(seq[6], IndexTriple::new(2, 1, 1));
    }

    #[test]
    fn accessors() {
        let g = PhysicalGrid::new(9, 2, 12).unwrap();
        assert_eq!((g.nxx(), g.nzz_perproc(), g.nyy()), (9, 2, 12));
        let g0 = PhysicalGrid0::new(6, 1, 8).unwrap();
        assert_eq!((g0.nx(), g0.nz_perproc(), g0.ny()), (6, 1, 8));
    }

    #[test]
    fn padded_and_unpadded_are_distinct_kinds() {
        let g = PhysicalGrid::new(4, 2, 4).unwrap();
        let g0 = PhysicalGrid0::new(4, 2, 4).unwrap();
        assert_eq!(g.plan(), g0.plan());
        assert!(!g.plan_eq(&g0));
        assert_eq!(g0.kind(), GridKind::Physical0);
    }

    #[test]
    fn compliance_full() {
        compliance::run_full_compliance(&PhysicalGrid::new(5, 3, 4).unwrap());
        compliance::run_full_compliance(&PhysicalGrid0::new(3, 1, 2).unwrap());
    }

    proptest! {
        #[test]
        fn visits_exact_cartesian_product(nxx in 1i32..8, nzz in 1i32..5, nyy in 1i32..8) {
            let g = PhysicalGrid::new(nxx, nzz, nyy).unwrap();
            let mut seen = indexmap::IndexSet::new();
            g.for_each(|t| {
                seen.insert(t);
            });
            let total = (nxx * nzz * nyy) as usize;
            prop_assert_eq!(g.visit_count(), total);
            prop_assert_eq!(seen.len(), total);
            for ix in 1..=nxx {
                for iz in 1..=nzz {
                    for iy in 1..=nyy {
                        prop_assert!(seen.contains(&IndexTriple::new(ix, iy, iz)));
                    }
                }
            }
        }
    }
}
