//! Test utilities for gridwalk development.
//!
//! Provides per-cell action fixtures ([`Recorder`], [`FailAfter`],
//! [`CellCounter`]) and [`full_product`] for building expected visit
//! sets.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{full_product, CellCounter, CellFailure, FailAfter, Recorder};
