//! Grid traversals for distributed pseudospectral solvers.
//!
//! A solver splits its 3-D grid across ranks and repeatedly walks each
//! rank's local slab in three representations. This crate defines the
//! [`Traversal`] trait and the three grid types that implement it, all
//! backed by one validated [`TraversalPlan`]:
//!
//! - [`SpectralGrid`]: z, then half-spectrum y, then per-rank x, with
//!   optional exclusions on z and x
//! - [`PhysicalGrid`]: padded physical grid; x, then per-rank z, then y
//! - [`PhysicalGrid0`]: unpadded physical grid; same nest as [`PhysicalGrid`]
//!
//! The free functions [`spectral_iterate`], [`physical_iterate`] and
//! [`physical_iterate0`] validate and traverse in one call. [`RankConfig`]
//! bundles one rank's extents for all three kinds.
//!
//! # Examples
//!
//! ```
//! use gridwalk_traverse::spectral_iterate;
//! use std::convert::Infallible;
//!
//! let mut seen = Vec::new();
//! spectral_iterate(3, 2, 2, 2, -1, |t| {
//!     seen.push((t.iz, t.iy, t.ix));
//!     Ok::<(), Infallible>(())
//! })
//! .unwrap();
//! assert_eq!(seen.len(), 8);
//! assert_eq!(seen[..3], [(1, 1, 1), (1, 1, 2), (1, 2, 1)]);
//! assert_eq!(seen[4], (3, 1, 1));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod iterate;
pub mod nest;
pub mod physical;
pub mod plan;
pub mod spectral;
pub mod traversal;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::{ConfigError, PhysicalExtents, RankConfig, RankGrids, SpectralExtents};
pub use gridwalk_core::{
    Axis, Exclusion, GridError, GridExtent, GridKind, IndexTriple, TraversalError,
};
pub use iterate::{physical_iterate, physical_iterate0, spectral_iterate};
pub use nest::{AxisExclusions, LoopNest};
pub use physical::{PhysicalGrid, PhysicalGrid0};
pub use plan::{TraversalIter, TraversalPlan};
pub use spectral::SpectralGrid;
pub use traversal::Traversal;
