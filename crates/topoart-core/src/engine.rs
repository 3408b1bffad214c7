//! **TopoArt**: the two-layer coordinator.
//!
//! ```text
//!   raw sample x ∈ [0,1]^d
//!          │
//!          ▼
//!   complement code  [x, 1−x]
//!          │
//!          ▼
//!   ┌──────────────────────┐
//!   │  coarse layer (ρ_a)  │── outcome ──┐
//!   └──────────────────────┘             │ filter: best match permanent?
//!                                        ▼
//!                             ┌──────────────────────┐
//!                             │   fine layer (ρ_b)   │
//!                             └──────────────────────┘
//!
//!   every τ samples: prune candidates in both layers
//! ```
//!
//! Only inputs already explained by a trustworthy coarse category reach the
//! fine layer, so the fine layer never learns from noise the coarse layer has
//! not yet confirmed.

use std::collections::BTreeSet;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{FilterMode, TopoArtConfig};
use crate::encoder::{complement_code, validate_sample};
use crate::error::{Result, TopoArtError};
use crate::layer::{LayerSnapshot, LayerStats, ResonanceLayer, TrainOutcome};
use crate::node::NodeId;

// ─────────────────────────────────────────────
// Reports
// ─────────────────────────────────────────────

/// Node ids removed by one maintenance pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneReport {
    pub coarse: Vec<NodeId>,
    pub fine: Vec<NodeId>,
}

/// Everything one call to [`TopoArt::learn`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleOutcome {
    /// 1-based position of this sample in the engine's lifetime stream.
    pub sample: u64,
    pub coarse: TrainOutcome,
    /// Present only when the sample passed the cross-layer filter.
    pub fine: Option<TrainOutcome>,
    /// Present only when this sample completed a maintenance interval.
    pub pruned: Option<PruneReport>,
}

impl SampleOutcome {
    pub fn forwarded(&self) -> bool {
        self.fine.is_some()
    }
}

/// Aggregate statistics for one [`TopoArt::fit`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitReport {
    /// Samples absorbed by this call.
    pub samples: u64,
    /// Samples forwarded to the fine layer.
    pub forwarded: u64,
    pub coarse_created: u64,
    pub fine_created: u64,
    /// Maintenance passes triggered during this call.
    pub prune_passes: u64,
    pub coarse_pruned: u64,
    pub fine_pruned: u64,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl FitReport {
    fn record(&mut self, outcome: &SampleOutcome) {
        self.samples += 1;
        if outcome.coarse.created().is_some() {
            self.coarse_created += 1;
        }
        if let Some(fine) = &outcome.fine {
            self.forwarded += 1;
            if fine.created().is_some() {
                self.fine_created += 1;
            }
        }
        if let Some(pruned) = &outcome.pruned {
            self.prune_passes += 1;
            self.coarse_pruned += pruned.coarse.len() as u64;
            self.fine_pruned += pruned.fine.len() as u64;
        }
    }
}

/// Read-only lookup result for one sample.
///
/// Cluster indices refer to the order of [`TopoArt::coarse_clusters`] /
/// [`TopoArt::fine_clusters`] at the time of the call; they are `None` when
/// the matching node is still a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub coarse: Option<NodeId>,
    pub coarse_cluster: Option<usize>,
    pub fine: Option<NodeId>,
    pub fine_cluster: Option<usize>,
}

/// Serializable state of the whole engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopoArtSnapshot {
    pub config: TopoArtConfig,
    pub fine_vigilance: f64,
    pub sample_count: u64,
    pub input_dim: Option<usize>,
    pub coarse: LayerSnapshot,
    pub fine: LayerSnapshot,
}

// ─────────────────────────────────────────────
// TopoArt
// ─────────────────────────────────────────────

/// Two-layer TopoART network.
///
/// Owns both layers exclusively. Every sample is absorbed completely
/// (encode, coarse update, optional fine update, optional pruning) before
/// the next one is looked at; given the same parameters and input order the
/// result is always the same.
#[derive(Debug, Clone)]
pub struct TopoArt {
    config: TopoArtConfig,
    coarse: ResonanceLayer,
    fine: ResonanceLayer,
    sample_count: u64,
    /// Raw (un-coded) input width, fixed by the first accepted sample.
    input_dim: Option<usize>,
}

impl TopoArt {
    /// Build an engine, failing fast on any out-of-range parameter.
    pub fn new(config: TopoArtConfig) -> Result<Self> {
        config.validate()?;
        let coarse = ResonanceLayer::new(config.rho_a, config.beta, config.phi)?;
        let fine = ResonanceLayer::new(config.fine_vigilance(), config.beta, config.phi)?;
        Ok(Self {
            config,
            coarse,
            fine,
            sample_count: 0,
            input_dim: None,
        })
    }

    /// Build from environment variables (see [`TopoArtConfig::from_env`]).
    pub fn from_env() -> Result<Self> {
        Self::new(TopoArtConfig::from_env())
    }

    pub fn config(&self) -> &TopoArtConfig {
        &self.config
    }

    pub fn coarse(&self) -> &ResonanceLayer {
        &self.coarse
    }

    pub fn fine(&self) -> &ResonanceLayer {
        &self.fine
    }

    /// Samples absorbed over the engine's lifetime.
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    pub fn input_dim(&self) -> Option<usize> {
        self.input_dim
    }

    pub fn stats(&self) -> (LayerStats, LayerStats) {
        (self.coarse.stats(), self.fine.stats())
    }

    // ── Learning ─────────────────────────────────────────────

    /// Absorb a batch of raw samples in order.
    ///
    /// The whole batch is validated first; if any sample is rejected the
    /// engine is left exactly as it was. Error indices are batch positions.
    pub fn fit<S: AsRef<[f64]>>(&mut self, samples: &[S]) -> Result<FitReport> {
        let t0 = Instant::now();

        let mut dim = self.input_dim;
        for (i, s) in samples.iter().enumerate() {
            let s = s.as_ref();
            validate_sample(i, s, dim)?;
            dim = Some(s.len());
        }

        let mut report = FitReport::default();
        for s in samples {
            let outcome = self.absorb(s.as_ref())?;
            report.record(&outcome);
        }
        report.duration_ms = t0.elapsed().as_millis() as u64;

        let (coarse, fine) = self.stats();
        info!(
            samples        = report.samples,
            forwarded      = report.forwarded,
            coarse_nodes   = coarse.nodes,
            coarse_perm    = coarse.permanent,
            fine_nodes     = fine.nodes,
            fine_perm      = fine.permanent,
            prune_passes   = report.prune_passes,
            duration_ms    = report.duration_ms,
            "TopoART fit complete"
        );
        Ok(report)
    }

    /// Absorb a single raw sample. A rejected sample reports index `0`.
    pub fn learn(&mut self, sample: &[f64]) -> Result<SampleOutcome> {
        validate_sample(0, sample, self.input_dim)?;
        self.absorb(sample)
    }

    /// Caller has validated `sample` against `input_dim`.
    fn absorb(&mut self, sample: &[f64]) -> Result<SampleOutcome> {
        self.input_dim = Some(sample.len());
        let x = complement_code(sample);

        let coarse = self.coarse.train_sample(&x)?;
        let fine = if self.passes_filter(&coarse) {
            Some(self.fine.train_sample(&x)?)
        } else {
            None
        };

        self.sample_count += 1;
        let pruned = if self.sample_count % self.config.tau == 0 {
            Some(self.prune())
        } else {
            None
        };

        Ok(SampleOutcome { sample: self.sample_count, coarse, fine, pruned })
    }

    fn passes_filter(&self, coarse: &TrainOutcome) -> bool {
        match self.config.filter {
            FilterMode::Established => coarse.is_established(),
            FilterMode::PostUpdate => coarse.winner_permanent(),
        }
    }

    /// Every candidate in both layers goes, including one created by the
    /// sample that closed the interval.
    fn prune(&mut self) -> PruneReport {
        PruneReport {
            coarse: self.coarse.prune_candidates(),
            fine: self.fine.prune_candidates(),
        }
    }

    // ── Queries ──────────────────────────────────────────────

    pub fn coarse_clusters(&self) -> Vec<BTreeSet<NodeId>> {
        self.coarse.extract_clusters()
    }

    pub fn fine_clusters(&self) -> Vec<BTreeSet<NodeId>> {
        self.fine.extract_clusters()
    }

    /// Best resonating node per layer for `sample`, without learning.
    /// A rejected sample reports index `0`.
    pub fn predict(&self, sample: &[f64]) -> Result<Prediction> {
        validate_sample(0, sample, self.input_dim)?;
        let x = complement_code(sample);

        let coarse = self.coarse.best_match(&x)?;
        let fine = if self.fine.is_empty() { None } else { self.fine.best_match(&x)? };

        Ok(Prediction {
            coarse,
            coarse_cluster: coarse.and_then(|id| cluster_index(&self.coarse_clusters(), id)),
            fine,
            fine_cluster: fine.and_then(|id| cluster_index(&self.fine_clusters(), id)),
        })
    }

    pub fn snapshot(&self) -> TopoArtSnapshot {
        TopoArtSnapshot {
            config: self.config.clone(),
            fine_vigilance: self.fine.vigilance(),
            sample_count: self.sample_count,
            input_dim: self.input_dim,
            coarse: self.coarse.snapshot(),
            fine: self.fine.snapshot(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.snapshot()).map_err(TopoArtError::from)
    }
}

fn cluster_index(clusters: &[BTreeSet<NodeId>], id: NodeId) -> Option<usize> {
    clusters.iter().position(|c| c.contains(&id))
}
