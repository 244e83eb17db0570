//! Core types for the gridwalk traversal framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every traversal: logical [`Axis`] and [`GridKind`]
//! tags, validated [`GridExtent`]s, per-axis [`Exclusion`] markers, the
//! 1-based [`IndexTriple`] handed to per-cell actions, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod exclusion;
pub mod extent;
pub mod index;

pub use axis::{Axis, GridKind};
pub use error::{GridError, TraversalError};
pub use exclusion::Exclusion;
pub use extent::GridExtent;
pub use index::IndexTriple;
