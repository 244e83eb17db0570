//! Traversal trait compliance test helpers.
//!
//! These functions verify that a Traversal implementation satisfies the
//! invariants its callers rely on for buffer layout. Reused across all
//! grid test modules (SpectralGrid, PhysicalGrid, PhysicalGrid0).

use crate::traversal::Traversal;
use indexmap::IndexSet;

/// Assert that two calls to `ordering` return the same sequence.
pub fn assert_ordering_deterministic(t: &dyn Traversal) {
    let a = t.ordering();
    let b = t.ordering();
    assert_eq!(a, b, "ordering is non-deterministic");
}

/// Assert that `ordering` has exactly `visit_count` unique cells.
pub fn assert_ordering_complete(t: &dyn Traversal) {
    let ordering = t.ordering();
    assert_eq!(
        ordering.len(),
        t.visit_count(),
        "ordering length ({}) != visit_count ({})",
        ordering.len(),
        t.visit_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(unique.len(), t.visit_count(), "ordering has duplicates");
}

/// Assert every visited cell is in range and off every active exclusion.
pub fn assert_cells_in_bounds(t: &dyn Traversal) {
    let extent = t.extent();
    let exclusions = t.plan().exclusions();
    for cell in t.ordering() {
        assert!(extent.contains(cell), "{cell} outside extent {extent}");
        for axis in gridwalk_core::Axis::ALL {
            assert!(
                !exclusions.get(axis).skips(cell.get(axis)),
                "{cell} sits on the excluded {axis} index"
            );
        }
    }
}

/// Assert that `rank_of(ordering()[i]) == i` and `triple_at(i) == ordering()[i]`.
pub fn assert_rank_round_trip(t: &dyn Traversal) {
    for (i, cell) in t.ordering().into_iter().enumerate() {
        assert_eq!(t.rank_of(cell), Some(i), "rank_of({cell}) != {i}");
        assert_eq!(t.triple_at(i), Some(cell), "triple_at({i}) != {cell}");
    }
    assert_eq!(t.triple_at(t.visit_count()), None);
}

/// Assert that the iterator and the loop driver agree.
pub fn assert_iter_matches_ordering(t: &dyn Traversal) {
    let it = t.iter();
    assert_eq!(it.len(), t.visit_count());
    let from_iter: Vec<_> = it.collect();
    assert_eq!(from_iter, t.ordering(), "iterator order != loop order");
}

/// Assert that the visit count equals the product of effective extents.
pub fn assert_visit_count_formula(t: &dyn Traversal) {
    let plan = t.plan();
    let expected: usize = gridwalk_core::Axis::ALL
        .iter()
        .map(|&axis| plan.effective_extent(axis))
        .product();
    assert_eq!(t.visit_count(), expected);
}

/// Run all 6 compliance checks on a traversal.
pub fn run_full_compliance(t: &dyn Traversal) {
    assert_ordering_deterministic(t);
    assert_ordering_complete(t);
    assert_cells_in_bounds(t);
    assert_rank_round_trip(t);
    assert_iter_matches_ordering(t);
    assert_visit_count_formula(t);
}
