//! The core `Traversal` trait.

use crate::plan::{TraversalIter, TraversalPlan};
use gridwalk_core::{GridExtent, GridKind, IndexTriple};

/// A grid representation that can be walked cell by cell.
///
/// Implemented by [`SpectralGrid`](crate::SpectralGrid),
/// [`PhysicalGrid`](crate::PhysicalGrid) and
/// [`PhysicalGrid0`](crate::PhysicalGrid0). All three share the same
/// machinery ([`TraversalPlan`]) but stay distinct types so call sites
/// say which grid they walk.
///
/// # Thread Safety
///
/// Traversals hold only read-only plan data. `Send + Sync` lets each rank
/// (or worker thread) drive its own traversal concurrently; the action's
/// thread safety is the caller's concern.
pub trait Traversal: Send + Sync {
    /// Which grid representation this traversal walks.
    fn kind(&self) -> GridKind;

    /// The validated plan backing this traversal.
    fn plan(&self) -> &TraversalPlan;

    /// Raw local extents.
    fn extent(&self) -> GridExtent {
        self.plan().extent()
    }

    /// Number of cells a full traversal visits.
    fn visit_count(&self) -> usize {
        self.plan().len()
    }

    /// All visited cells in traversal order.
    ///
    /// Two calls on the same traversal return the same sequence.
    fn ordering(&self) -> Vec<IndexTriple> {
        self.plan().ordering()
    }

    /// Position of `triple` in traversal order, for buffer packing.
    fn rank_of(&self, triple: IndexTriple) -> Option<usize> {
        self.plan().rank_of(triple)
    }

    /// The cell at position `rank` in traversal order.
    fn triple_at(&self, rank: usize) -> Option<IndexTriple> {
        self.plan().triple_at(rank)
    }

    /// Iterate the visited cells in traversal order.
    fn iter(&self) -> TraversalIter {
        self.plan().iter()
    }

    /// Returns `true` if both traversals walk the same grid kind with the
    /// same nest, extents and exclusions, i.e. produce identical sequences.
    fn plan_eq(&self, other: &dyn Traversal) -> bool {
        self.kind() == other.kind() && self.plan() == other.plan()
    }

    /// Invoke `action` once per cell, in order, stopping at its first error.
    fn try_for_each<E, F>(&self, action: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(IndexTriple) -> Result<(), E>,
    {
        let _span = tracing::trace_span!("traverse", kind = %self.kind()).entered();
        self.plan().try_for_each(action)
    }

    /// Invoke an infallible `action` once per cell, in order.
    fn for_each<F>(&self, action: F)
    where
        Self: Sized,
        F: FnMut(IndexTriple),
    {
        let _span = tracing::trace_span!("traverse", kind = %self.kind()).entered();
        self.plan().for_each(action)
    }
}
