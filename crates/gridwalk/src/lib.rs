//! gridwalk: grid traversal and index mapping for distributed pseudospectral solvers.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! gridwalk sub-crates. For most users, adding `gridwalk` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridwalk::prelude::*;
//!
//! // One rank's slab: spectral x split across ranks, physical z split.
//! let config = RankConfig {
//!     rank: 1,
//!     spectral: SpectralExtents {
//!         nz: 8,
//!         ny_half: 5,
//!         nx_perproc: 2,
//!         iz_max: Exclusion::At(5),
//!         ix_max: Exclusion::None,
//!     },
//!     physical: PhysicalExtents { nx: 12, nz_perproc: 3, ny: 12 },
//!     physical0: PhysicalExtents { nx: 8, nz_perproc: 2, ny: 8 },
//! };
//! let grids = config.build().unwrap();
//!
//! // Pack spectral coefficients contiguously in traversal order.
//! let mut packed = vec![0.0f64; grids.spectral.visit_count()];
//! grids.spectral.for_each(|t| {
//!     let slot = grids.spectral.rank_of(t).unwrap();
//!     packed[slot] = f64::from(t.ix + 10 * t.iy + 100 * t.iz);
//! });
//! assert_eq!(packed[0], 111.0);
//! assert!(packed.iter().all(|&v| v != 0.0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridwalk-core` | Axes, extents, exclusions, index triples, errors |
//! | [`traverse`] | `gridwalk-traverse` | Traversal plans, grid types, entry points, rank config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`gridwalk-core`).
///
/// Contains [`types::GridExtent`], [`types::Exclusion`],
/// [`types::IndexTriple`], and the error types.
pub use gridwalk_core as types;

/// Traversals (`gridwalk-traverse`).
///
/// Provides the [`traverse::Traversal`] trait, the grid types
/// [`traverse::SpectralGrid`], [`traverse::PhysicalGrid`] and
/// [`traverse::PhysicalGrid0`], and the one-call entry points.
pub use gridwalk_traverse as traverse;

/// Common imports for typical gridwalk usage.
///
/// ```rust
/// use gridwalk::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridwalk_core::{Axis, Exclusion, GridExtent, GridKind, IndexTriple};

    // Errors
    pub use gridwalk_core::{GridError, TraversalError};
    pub use gridwalk_traverse::ConfigError;

    // Traversals
    pub use gridwalk_traverse::{
        physical_iterate, physical_iterate0, spectral_iterate, PhysicalGrid, PhysicalGrid0,
        SpectralGrid, Traversal, TraversalPlan,
    };

    // Configuration
    pub use gridwalk_traverse::{PhysicalExtents, RankConfig, RankGrids, SpectralExtents};
}
