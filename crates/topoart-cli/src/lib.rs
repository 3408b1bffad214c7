//! # topoart-cli
//!
//! Batch driver for `topoart-core`: loads samples from CSV (or generates
//! seeded synthetic blobs), trains a two-layer TopoART network on them in
//! file order, and reports the discovered clusters as JSON.

pub mod input;
pub mod report;
pub mod run;

pub use run::{execute, Cli};
