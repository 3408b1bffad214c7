//! # topoart-core
//!
//! Online, incremental clustering with Adaptive Resonance Theory and explicit
//! topology tracking (two-layer TopoART).
//!
//! A stream of feature vectors in `[0, 1]^d` is complement coded and absorbed
//! one sample at a time. Each layer keeps a set of hyper-rectangular prototype
//! nodes plus an adjacency graph recording which nodes jointly explained an
//! input; clusters are the connected components of the permanent nodes. The
//! model is never retrained from scratch.
//!
//! - [`ResonanceLayer`]: Fuzzy-ART arena with candidate/permanent lifecycle,
//!   second-best partial learning, and topology edges
//! - [`TopoArt`]: coarse (ρ_a) and fine (ρ_b) layers with the cross-layer
//!   noise filter and periodic candidate pruning
//! - [`SharedTopoArt`]: lock-guarded handle for use across threads
//!
//! ## Quick start
//! ```rust
//! use topoart_core::{TopoArt, TopoArtConfig};
//!
//! let mut art = TopoArt::new(TopoArtConfig { rho_a: 0.9, phi: 2, tau: 3, ..Default::default() })?;
//! art.fit(&[vec![0.5], vec![0.5], vec![0.9]])?;
//!
//! let clusters = art.coarse_clusters();
//! assert_eq!(clusters.len(), 1);
//! # Ok::<(), topoart_core::TopoArtError>(())
//! ```
//!
//! ## Environment variables
//! | Variable         | Default       | Description                        |
//! |------------------|---------------|------------------------------------|
//! | `TOPOART_RHO_A`  | `0.9`         | Coarse-layer vigilance             |
//! | `TOPOART_RHO_B`  | midpoint      | Fine-layer vigilance               |
//! | `TOPOART_BETA`   | `0.5`         | Second-best partial-learning rate  |
//! | `TOPOART_PHI`    | `5`           | Count needed to become permanent   |
//! | `TOPOART_TAU`    | `100`         | Samples between pruning passes     |
//! | `TOPOART_FILTER` | `established` | Cross-layer forwarding rule        |

pub mod components;
pub mod config;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod layer;
pub mod node;
pub mod shared;

pub use config::{FilterMode, TopoArtConfig};
pub use encoder::{complement_code, validate_sample};
pub use engine::{FitReport, Prediction, PruneReport, SampleOutcome, TopoArt, TopoArtSnapshot};
pub use error::{Result, TopoArtError};
pub use layer::{activation, match_score, LayerSnapshot, LayerStats, ResonanceLayer, TrainOutcome};
pub use node::{ArtNode, NodeId, NodeState};
pub use shared::SharedTopoArt;
