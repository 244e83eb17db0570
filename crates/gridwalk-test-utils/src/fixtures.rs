//! Reusable per-cell action fixtures.
//!
//! Three standard actions for traversal testing:
//!
//! - [`Recorder`] — records every visited cell in order.
//! - [`CellCounter`] — counts visits through `&self` (usable from `Fn`).
//! - [`FailAfter`] — fails deterministically after N successful visits.

use gridwalk_core::{GridExtent, IndexTriple};
use indexmap::IndexSet;
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Records visited cells in visit order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub visits: Vec<IndexTriple>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one cell. Pass `|t| rec.record(t)` as the action.
    pub fn record(&mut self, cell: IndexTriple) {
        self.visits.push(cell);
    }

    /// Fallible form of [`record`](Self::record) for `try_for_each`-style drivers.
    pub fn try_record(&mut self, cell: IndexTriple) -> Result<(), CellFailure> {
        self.record(cell);
        Ok(())
    }

    /// Visited cells with duplicates removed, in first-visit order.
    pub fn distinct(&self) -> IndexSet<IndexTriple> {
        self.visits.iter().copied().collect()
    }

    /// Whether any cell was visited more than once.
    pub fn has_duplicates(&self) -> bool {
        self.distinct().len() != self.visits.len()
    }
}

/// Counts visits through a shared reference.
///
/// Uses `AtomicUsize` so the counter satisfies `Sync` and can be shared
/// with traversals running on several threads.
#[derive(Debug, Default)]
pub struct CellCounter {
    count: AtomicUsize,
}

impl CellCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&self, _cell: IndexTriple) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

/// The error returned by [`FailAfter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellFailure {
    /// The cell whose action failed.
    pub cell: IndexTriple,
    /// Successful visits before the failure.
    pub after: usize,
}

impl fmt::Display for CellFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deliberate failure at {} after {} successful cells",
            self.cell, self.after
        )
    }
}

impl Error for CellFailure {}

/// Fails deterministically after a configurable number of successful calls.
///
/// Useful for testing fail-fast propagation: a traversal must stop at the
/// first failure and return the [`CellFailure`] as-is.
#[derive(Debug)]
pub struct FailAfter {
    pub succeed_count: usize,
    call_count: AtomicUsize,
}

impl FailAfter {
    /// Create an action that succeeds `succeed_count` times then fails.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn call(&self, cell: IndexTriple) -> Result<(), CellFailure> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(CellFailure {
                cell,
                after: self.succeed_count,
            });
        }
        Ok(())
    }

    /// How many times `call()` has been invoked.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Reset the call counter.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::Relaxed);
    }
}

/// Every cell of `extent`, with no exclusions, in `x, y, z` nesting.
///
/// Order is irrelevant for set comparisons; use the traversal's own
/// ordering when order matters.
pub fn full_product(extent: GridExtent) -> IndexSet<IndexTriple> {
    let mut out = IndexSet::new();
    for ix in 1..=extent.x() {
        for iy in 1..=extent.y() {
            for iz in 1..=extent.z() {
                out.insert(IndexTriple::new(ix, iy, iz));
            }
        }
    }
    out
}
