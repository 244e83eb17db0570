//! Validated traversal plans and their iterator.

use crate::nest::{AxisExclusions, LoopNest};
use gridwalk_core::{Axis, Exclusion, GridError, GridExtent, IndexTriple};
use std::iter::FusedIterator;

/// A validated triple-loop traversal: loop nest, extents, exclusions.
///
/// Built once per rank per grid kind and reused for every traversal of
/// that grid. Construction checks every active exclusion against its
/// axis extent, so a plan can never skip an unintended index.
///
/// The visit order is fixed: the nest's outer axis varies slowest. Cells
/// are numbered `0..len()` in that order; [`rank_of`](Self::rank_of) and
/// [`triple_at`](Self::triple_at) convert between the two in O(1).
///
/// # Examples
///
/// ```
/// use gridwalk_traverse::{Axis, AxisExclusions, Exclusion, GridExtent, IndexTriple, LoopNest, TraversalPlan};
///
/// let extent = GridExtent::new(2, 2, 3).unwrap();
/// let ex = AxisExclusions::none().with(Axis::Z, Exclusion::At(2));
/// let plan = TraversalPlan::new(LoopNest::SPECTRAL, extent, ex).unwrap();
///
/// assert_eq!(plan.len(), 8);
/// assert_eq!(plan.triple_at(4), Some(IndexTriple::new(1, 1, 3)));
/// assert_eq!(plan.rank_of(IndexTriple::new(1, 1, 2)), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TraversalPlan {
    nest: LoopNest,
    extent: GridExtent,
    exclusions: AxisExclusions,
    /// Visited values per nest level, outer first.
    effective: [usize; 3],
    len: usize,
}

impl TraversalPlan {
    /// Validate exclusions against `extent` and build the plan.
    ///
    /// Exclusions are checked outer axis first. Returns
    /// `Err(GridError::InvalidExclusion)` for an active exclusion outside
    /// `[1, extent]`, or `Err(GridError::CellCountOverflow)` if the visit
    /// count does not fit in `usize`.
    pub fn new(
        nest: LoopNest,
        extent: GridExtent,
        exclusions: AxisExclusions,
    ) -> Result<Self, GridError> {
        let mut effective = [0usize; 3];
        for (level, axis) in nest.axes().into_iter().enumerate() {
            let n = extent.get(axis);
            let exclusion = exclusions.get(axis).check(axis, n).inspect_err(|e| {
                tracing::debug!(%nest, %extent, error = %e, "traversal plan rejected");
            })?;
            effective[level] = (n - i32::from(exclusion.is_active())) as usize;
        }
        let len = effective
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or_else(|| {
                tracing::debug!(%nest, %extent, "traversal plan cell count overflows");
                GridError::CellCountOverflow { extent }
            })?;
        Ok(Self {
            nest,
            extent,
            exclusions,
            effective,
            len,
        })
    }

    /// Loop nest of this plan.
    pub fn nest(&self) -> LoopNest {
        self.nest
    }

    /// Raw (unexcluded) extents.
    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Per-axis exclusions.
    pub fn exclusions(&self) -> AxisExclusions {
        self.exclusions
    }

    /// Number of values visited along `axis`: the extent, minus one if
    /// that axis carries an active exclusion.
    pub fn effective_extent(&self, axis: Axis) -> usize {
        let level = self
            .nest
            .axes()
            .iter()
            .position(|&a| a == axis)
            .unwrap_or_default();
        self.effective[level]
    }

    /// Number of cells visited.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when an exclusion removes every value of a length-1 axis.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate the visited cells in traversal order.
    pub fn iter(&self) -> TraversalIter {
        TraversalIter {
            plan: *self,
            front: 0,
            back: self.len,
        }
    }

    /// All visited cells in traversal order.
    pub fn ordering(&self) -> Vec<IndexTriple> {
        let mut out = Vec::with_capacity(self.len);
        self.for_each(|t| out.push(t));
        out
    }

    /// The cell at position `rank` in traversal order.
    pub fn triple_at(&self, rank: usize) -> Option<IndexTriple> {
        if rank >= self.len {
            return None;
        }
        let [outer, middle, inner] = self.nest.axes();
        let [_, n_mid, n_in] = self.effective;
        let k_in = rank % n_in;
        let rest = rank / n_in;
        let k_mid = rest % n_mid;
        let k_out = rest / n_mid;

        let mut t = IndexTriple::new(0, 0, 0);
        t.set(outer, self.coord_of(outer, k_out));
        t.set(middle, self.coord_of(middle, k_mid));
        t.set(inner, self.coord_of(inner, k_in));
        Some(t)
    }

    /// Position of `triple` in traversal order.
    ///
    /// Returns `None` if the triple is out of range or sits on an
    /// excluded index.
    pub fn rank_of(&self, triple: IndexTriple) -> Option<usize> {
        if !self.extent.contains(triple) {
            return None;
        }
        let [outer, middle, inner] = self.nest.axes();
        let [_, n_mid, n_in] = self.effective;
        let k_out = self.level_of(outer, triple.get(outer))?;
        let k_mid = self.level_of(middle, triple.get(middle))?;
        let k_in = self.level_of(inner, triple.get(inner))?;
        Some((k_out * n_mid + k_mid) * n_in + k_in)
    }

    /// Visit every cell in order, stopping at the first action error.
    ///
    /// The action's error is returned unchanged; cells after the failing
    /// one are not visited.
    pub fn try_for_each<E, F>(&self, mut action: F) -> Result<(), E>
    where
        F: FnMut(IndexTriple) -> Result<(), E>,
    {
        tracing::trace!(
            nest = %self.nest,
            extent = %self.extent,
            cells = self.len,
            "traversal start"
        );
        let [outer, middle, inner] = self.nest.axes();
        let (ex_out, ex_mid, ex_in) = (
            self.exclusions.get(outer),
            self.exclusions.get(middle),
            self.exclusions.get(inner),
        );
        let mut visited = 0usize;
        let mut t = IndexTriple::new(0, 0, 0);
        for a in 1..=self.extent.get(outer) {
            if ex_out.skips(a) {
                continue;
            }
            t.set(outer, a);
            for b in 1..=self.extent.get(middle) {
                if ex_mid.skips(b) {
                    continue;
                }
                t.set(middle, b);
                for c in 1..=self.extent.get(inner) {
                    if ex_in.skips(c) {
                        continue;
                    }
                    t.set(inner, c);
                    if let Err(e) = action(t) {
                        tracing::trace!(rank = visited, cell = %t, "traversal aborted by action");
                        return Err(e);
                    }
                    visited += 1;
                }
            }
        }
        Ok(())
    }

    /// Visit every cell in order with an action that cannot fail.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(IndexTriple),
    {
        let res: Result<(), std::convert::Infallible> = self.try_for_each(|t| {
            action(t);
            Ok(())
        });
        match res {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// 1-based coordinate of the `k`-th visited value along `axis`.
    fn coord_of(&self, axis: Axis, k: usize) -> i32 {
        let c = k as i32 + 1;
        match self.exclusions.get(axis) {
            Exclusion::At(e) if c >= e => c + 1,
            _ => c,
        }
    }

    /// Inverse of [`coord_of`](Self::coord_of); `None` on the excluded value.
    fn level_of(&self, axis: Axis, c: i32) -> Option<usize> {
        match self.exclusions.get(axis) {
            Exclusion::At(e) if c == e => None,
            Exclusion::At(e) if c > e => Some((c - 2) as usize),
            _ => Some((c - 1) as usize),
        }
    }
}

impl<'a> IntoIterator for &'a TraversalPlan {
    type Item = IndexTriple;
    type IntoIter = TraversalIter;

    fn into_iter(self) -> TraversalIter {
        self.iter()
    }
}

/// Iterator over a [`TraversalPlan`]'s cells in traversal order.
///
/// Owns a copy of the plan, so it outlives the plan it came from.
#[derive(Clone, Debug)]
pub struct TraversalIter {
    plan: TraversalPlan,
    front: usize,
    back: usize,
}

impl Iterator for TraversalIter {
    type Item = IndexTriple;

    fn next(&mut self) -> Option<IndexTriple> {
        if self.front >= self.back {
            return None;
        }
        let t = self.plan.triple_at(self.front)?;
        self.front += 1;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<IndexTriple> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for TraversalIter {
    fn next_back(&mut self) -> Option<IndexTriple> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.plan.triple_at(self.back)
    }
}

impl ExactSizeIterator for TraversalIter {}

impl FusedIterator for TraversalIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn spectral(nz: i32, ny: i32, nx: i32, iz: Exclusion, ix: Exclusion) -> TraversalPlan {
        let extent = GridExtent::new(nx, ny, nz).unwrap();
        let ex = AxisExclusions::none()
            .with(Axis::Z, iz)
            .with(Axis::X, ix);
        TraversalPlan::new(LoopNest::SPECTRAL, extent, ex).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn exclusion_checked_against_its_own_axis() {
        let extent = GridExtent::new(2, 9, 9).unwrap();
        let ex = AxisExclusions::none().with(Axis::X, Exclusion::At(3));
        assert_eq!(
            TraversalPlan::new(LoopNest::SPECTRAL, extent, ex),
            Err(GridError::InvalidExclusion {
                axis: Axis::X,
                value: 3,
                extent: 2
            })
        );
    }

    #[test]
    fn exclusions_reported_outer_first() {
        let extent = GridExtent::new(2, 2, 2).unwrap();
        let ex = AxisExclusions::none()
            .with(Axis::X, Exclusion::At(0))
            .with(Axis::Z, Exclusion::At(9));
        let err = TraversalPlan::new(LoopNest::SPECTRAL, extent, ex).unwrap_err();
        assert!(matches!(err, GridError::InvalidExclusion { axis: Axis::Z, .. }));
    }

    #[test]
    fn effective_extent_drops_excluded_value() {
        let p = spectral(4, 3, 5, Exclusion::At(4), Exclusion::At(1));
        assert_eq!(p.effective_extent(Axis::Z), 3);
        assert_eq!(p.effective_extent(Axis::Y), 3);
        assert_eq!(p.effective_extent(Axis::X), 4);
        assert_eq!(p.len(), 36);
    }

    #[test]
    fn excluding_only_value_gives_empty_plan() {
        let p = spectral(1, 4, 4, Exclusion::At(1), Exclusion::None);
        assert!(p.is_empty());
        assert_eq!(p.iter().count(), 0);
        assert_eq!(p.triple_at(0), None);
        let mut calls = 0;
        p.for_each(|_| calls += 1);
        assert_eq!(calls, 0);
    }

    // ── Ordering ────────────────────────────────────────────────

    #[test]
    fn spectral_worked_order() {
        let p = spectral(3, 2, 2, Exclusion::At(2), Exclusion::None);
        let got: Vec<(i32, i32, i32)> = p.iter().map(|t| (t.iz, t.iy, t.ix)).collect();
        assert_eq!(
            got,
            vec![
                (1, 1, 1),
                (1, 1, 2),
                (1, 2, 1),
                (1, 2, 2),
                (3, 1, 1),
                (3, 1, 2),
                (3, 2, 1),
                (3, 2, 2),
            ]
        );
    }

    #[test]
    fn physical_nest_varies_y_fastest() {
        let extent = GridExtent::new(2, 2, 2).unwrap();
        let p = TraversalPlan::new(LoopNest::PHYSICAL, extent, AxisExclusions::none()).unwrap();
        let got: Vec<[i32; 3]> = p.iter().take(4).map(|t| t.to_array()).collect();
        assert_eq!(got, vec![[1, 1, 1], [1, 2, 1], [1, 1, 2], [1, 2, 2]]);
    }

    #[test]
    fn iterator_matches_loop_driver() {
        let p = spectral(5, 3, 4, Exclusion::At(3), Exclusion::At(4));
        let from_iter: Vec<IndexTriple> = p.iter().collect();
        assert_eq!(from_iter, p.ordering());
    }

    #[test]
    fn reverse_and_nth() {
        let p = spectral(3, 2, 2, Exclusion::At(2), Exclusion::None);
        let fwd = p.ordering();
        let mut rev: Vec<IndexTriple> = p.iter().rev().collect();
        rev.reverse();
        assert_eq!(rev, fwd);

        let mut it = p.iter();
        assert_eq!(it.nth(5), Some(fwd[5]));
        assert_eq!(it.len(), 2);
        assert_eq!(it.nth(10), None);
        assert_eq!(it.next(), None);
    }

    // ── Rank mapping ────────────────────────────────────────────

    #[test]
    fn rank_of_rejects_excluded_and_out_of_range() {
        let p = spectral(3, 2, 4, Exclusion::At(2), Exclusion::At(4));
        assert_eq!(p.rank_of(IndexTriple::new(1, 1, 2)), None);
        assert_eq!(p.rank_of(IndexTriple::new(4, 1, 1)), None);
        assert_eq!(p.rank_of(IndexTriple::new(0, 1, 1)), None);
        assert_eq!(p.rank_of(IndexTriple::new(1, 3, 1)), None);
        assert_eq!(p.rank_of(IndexTriple::new(1, 1, 1)), Some(0));
        assert_eq!(p.rank_of(IndexTriple::new(3, 2, 3)), Some(11));
    }

    // ── Action errors ───────────────────────────────────────────

    #[test]
    fn action_error_stops_traversal() {
        let p = spectral(2, 2, 2, Exclusion::None, Exclusion::None);
        let mut calls = 0;
        let res = p.try_for_each(|t| {
            calls += 1;
            if t == IndexTriple::new(1, 2, 1) {
                Err("stop")
            } else {
                Ok(())
            }
        });
        assert_eq!(res, Err("stop"));
        assert_eq!(calls, 3);
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn count_bounds_and_exclusions(
            nz in 1i32..7,
            ny in 1i32..5,
            nx in 1i32..7,
            iz in 0i32..8,
            ix in 0i32..8,
        ) {
            let iz = if iz == 0 || iz > nz { Exclusion::None } else { Exclusion::At(iz) };
            let ix = if ix == 0 || ix > nx { Exclusion::None } else { Exclusion::At(ix) };
            let p = spectral(nz, ny, nx, iz, ix);
            let nz_eff = (nz - i32::from(iz.is_active())) as usize;
            let nx_eff = (nx - i32::from(ix.is_active())) as usize;
            prop_assert_eq!(p.len(), nz_eff * ny as usize * nx_eff);

            let cells = p.ordering();
            prop_assert_eq!(cells.len(), p.len());
            for t in &cells {
                prop_assert!(p.extent().contains(*t));
                prop_assert!(!iz.skips(t.iz));
                prop_assert!(!ix.skips(t.ix));
            }
        }

        #[test]
        fn rank_and_triple_are_inverse(
            a in 1i32..6,
            b in 1i32..6,
            c in 1i32..6,
            e in 0i32..6,
            nest_pick in 0usize..2,
        ) {
            let nest = [LoopNest::SPECTRAL, LoopNest::PHYSICAL][nest_pick];
            let extent = GridExtent::new(a, b, c).unwrap();
            let outer = nest.outer();
            let ex = if e >= 1 && e <= extent.get(outer) {
                AxisExclusions::none().with(outer, Exclusion::At(e))
            } else {
                AxisExclusions::none()
            };
            let p = TraversalPlan::new(nest, extent, ex).unwrap();
            for (rank, t) in p.iter().enumerate() {
                prop_assert_eq!(p.rank_of(t), Some(rank));
                prop_assert_eq!(p.triple_at(rank), Some(t));
            }
            prop_assert_eq!(p.triple_at(p.len()), None);
        }
    }
}
