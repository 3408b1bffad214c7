//! ArtNode: a single prototype region inside a resonance layer.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// NodeId
// ─────────────────────────────────────────────

/// Stable node identifier, assigned sequentially per layer at creation time.
///
/// Identifiers are never reused after a node is pruned, so edges and any
/// identifiers held by callers stay meaningful across deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node{}", self.0)
    }
}

// ─────────────────────────────────────────────
// NodeState
// ─────────────────────────────────────────────

/// Lifecycle state. The only transition is `Candidate → Permanent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    /// Provisional; removed by the next pruning pass unless promoted first.
    Candidate,
    /// Validated; survives every pruning pass.
    Permanent,
}

impl std::fmt::Display for NodeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeState::Candidate => write!(f, "candidate"),
            NodeState::Permanent => write!(f, "permanent"),
        }
    }
}

// ─────────────────────────────────────────────
// ArtNode
// ─────────────────────────────────────────────

/// A category box in complement-coded space together with its bookkeeping.
///
/// Fields are read-only from outside the crate; every mutation goes through
/// [`crate::ResonanceLayer`] so the lifecycle and symmetry rules hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtNode {
    pub(crate) id: NodeId,
    pub(crate) weights: Vec<f64>,
    pub(crate) count: u64,
    pub(crate) permanent: bool,
    pub(crate) neighbors: BTreeSet<NodeId>,
}

impl ArtNode {
    pub(crate) fn new(id: NodeId, x: &[f64]) -> Self {
        Self {
            id,
            weights: x.to_vec(),
            count: 1,
            permanent: false,
            neighbors: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Complement-coded weight vector; usable as the node's prototype.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of full or partial updates this node has received, counting
    /// its creation.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_permanent(&self) -> bool {
        self.permanent
    }

    pub fn state(&self) -> NodeState {
        if self.permanent { NodeState::Permanent } else { NodeState::Candidate }
    }

    pub fn neighbors(&self) -> &BTreeSet<NodeId> {
        &self.neighbors
    }

    /// Bounds of the box in raw (un-coded) space: `(lower, upper)`.
    ///
    /// The first half of the weights is the lower corner; the upper corner is
    /// one minus the second half.
    pub fn bounds(&self) -> (Vec<f64>, Vec<f64>) {
        let d = self.weights.len() / 2;
        let lower = self.weights[..d].to_vec();
        let upper = self.weights[d..].iter().map(|w| 1.0 - w).collect();
        (lower, upper)
    }

    /// Count one more observation and promote once `phi` is reached.
    /// Returns `true` only on the update that performs the promotion.
    pub(crate) fn observe(&mut self, phi: u64) -> bool {
        self.count += 1;
        self.promote_if_ready(phi)
    }

    pub(crate) fn promote_if_ready(&mut self, phi: u64) -> bool {
        if !self.permanent && self.count >= phi {
            self.permanent = true;
            true
        } else {
            false
        }
    }
}
