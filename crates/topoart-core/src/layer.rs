//! **ResonanceLayer**, one TopoART layer. A Fuzzy-ART category arena plus
//! the topology graph between its nodes.
//!
//! # Algorithm
//! For an encoded input `x` and node weights `w` (`∧` = component-wise min,
//! `|·|` = L1 norm):
//! ```text
//! activation(x, w) = |x ∧ w| / (α + |w|)        α = 1e-4
//! match(x, w)      = |x ∧ w| / (ε + |x|)        ε = 1e-12, resonates iff ≥ vigilance
//!
//! best match   : w ← x ∧ w                       (fast learning)
//! second match : w ← β (x ∧ w) + (1 − β) w       (partial learning)
//!                edge(best, second)
//! ```
//! Nodes are scanned in descending activation, ties keeping creation order.
//! If nothing resonates a new candidate node is created at `x`.
//!
//! # Complexity
//! O(N · D) per sample for N nodes of width D.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::connected_components;
use crate::config::{check_beta, check_phi, check_vigilance};
use crate::encoder::validate_sample;
use crate::error::Result;
use crate::node::{ArtNode, NodeId};

/// Choice-function offset α. Keeps the denominator positive and slightly
/// favours smaller boxes when intersections tie.
pub const CHOICE_ALPHA: f64 = 1e-4;

/// Match-function offset ε. A perfect match scores just below `1.0`, so
/// vigilance `1.0` admits nothing.
pub const MATCH_EPSILON: f64 = 1e-12;

/// `|x ∧ w| / (α + |w|)`
pub fn activation(x: &[f64], w: &[f64]) -> f64 {
    intersection(x, w) / (CHOICE_ALPHA + w.iter().sum::<f64>())
}

/// `|x ∧ w| / (ε + |x|)`
pub fn match_score(x: &[f64], w: &[f64]) -> f64 {
    intersection(x, w) / (MATCH_EPSILON + x.iter().sum::<f64>())
}

fn intersection(x: &[f64], w: &[f64]) -> f64 {
    x.iter().zip(w).map(|(a, b)| a.min(*b)).sum()
}

// ─────────────────────────────────────────────
// TrainOutcome
// ─────────────────────────────────────────────

/// What a single [`ResonanceLayer::train_sample`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrainOutcome {
    /// Nothing resonated; a fresh node was created at the input.
    Created {
        node: NodeId,
        /// `true` only when `phi == 1`.
        permanent: bool,
    },
    /// An existing node resonated and absorbed the input.
    Resonated {
        best: NodeId,
        /// Second resonating node, partially updated and linked to `best`.
        second: Option<NodeId>,
        /// `best` crossed `phi` on this very update.
        promoted: bool,
        /// `best` is permanent after the update.
        permanent: bool,
    },
}

impl TrainOutcome {
    /// The node that now represents the input: the best match, or the node
    /// just created for it.
    pub fn winner(&self) -> NodeId {
        match *self {
            TrainOutcome::Created { node, .. } => node,
            TrainOutcome::Resonated { best, .. } => best,
        }
    }

    /// Whether [`TrainOutcome::winner`] is permanent after the update.
    pub fn winner_permanent(&self) -> bool {
        match *self {
            TrainOutcome::Created { permanent, .. } | TrainOutcome::Resonated { permanent, .. } => permanent,
        }
    }

    /// An existing node resonated and was already permanent before this
    /// input could promote it.
    pub fn is_established(&self) -> bool {
        matches!(*self, TrainOutcome::Resonated { permanent: true, promoted: false, .. })
    }

    pub fn created(&self) -> Option<NodeId> {
        match *self {
            TrainOutcome::Created { node, .. } => Some(node),
            TrainOutcome::Resonated { .. } => None,
        }
    }
}

// ─────────────────────────────────────────────
// LayerStats / LayerSnapshot
// ─────────────────────────────────────────────

/// Point-in-time counters for one layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStats {
    /// Live nodes (candidate + permanent).
    pub nodes: usize,
    pub permanent: usize,
    pub candidates: usize,
    /// Undirected edges between live nodes.
    pub edges: usize,
    /// Samples this layer has been trained on.
    pub samples: u64,
}

/// Serializable view of a layer: parameters, every live node, and the
/// clusters derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSnapshot {
    pub vigilance: f64,
    pub beta: f64,
    pub phi: u64,
    pub stats: LayerStats,
    pub nodes: Vec<ArtNode>,
    pub clusters: Vec<BTreeSet<NodeId>>,
}

// ─────────────────────────────────────────────
// ResonanceLayer
// ─────────────────────────────────────────────

/// A single TopoART layer.
///
/// The layer owns its nodes exclusively in an id-keyed arena. `BTreeMap`
/// iteration follows ascending id, which is creation order, so ranking ties
/// resolve the same way on every run.
#[derive(Debug, Clone)]
pub struct ResonanceLayer {
    vigilance: f64,
    beta: f64,
    phi: u64,
    nodes: BTreeMap<NodeId, ArtNode>,
    next_id: u64,
    /// Encoded input width, fixed by the first accepted sample.
    width: Option<usize>,
    samples: u64,
}

impl ResonanceLayer {
    pub fn new(vigilance: f64, beta: f64, phi: u64) -> Result<Self> {
        check_vigilance("vigilance", vigilance)?;
        check_beta(beta)?;
        check_phi(phi)?;
        Ok(Self {
            vigilance,
            beta,
            phi,
            nodes: BTreeMap::new(),
            next_id: 0,
            width: None,
            samples: 0,
        })
    }

    // ── Accessors ────────────────────────────────────────────

    pub fn vigilance(&self) -> f64 {
        self.vigilance
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn phi(&self) -> u64 {
        self.phi
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&ArtNode> {
        self.nodes.get(&id)
    }

    /// Live nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &ArtNode> + '_ {
        self.nodes.values()
    }

    pub fn stats(&self) -> LayerStats {
        let permanent = self.nodes.values().filter(|n| n.permanent).count();
        let degree_sum: usize = self.nodes.values().map(|n| n.neighbors.len()).sum();
        LayerStats {
            nodes: self.nodes.len(),
            permanent,
            candidates: self.nodes.len() - permanent,
            edges: degree_sum / 2,
            samples: self.samples,
        }
    }

    // ── Learning ─────────────────────────────────────────────

    /// Absorb one complement-coded sample.
    ///
    /// The sample must be finite, inside `[0, 1]`, and as wide as every
    /// previous sample; otherwise it is rejected (error index `0`) and the
    /// layer is unchanged.
    pub fn train_sample(&mut self, x: &[f64]) -> Result<TrainOutcome> {
        validate_sample(0, x, self.width)?;
        self.width = Some(x.len());
        self.samples += 1;

        let ranked = self.rank(x);
        let best = match self.first_resonating(x, &ranked, None) {
            Some(id) => id,
            None => {
                let (node, permanent) = self.insert_node(x);
                return Ok(TrainOutcome::Created { node, permanent });
            }
        };

        let phi = self.phi;
        let beta = self.beta;

        let mut promoted = false;
        let mut permanent = false;
        if let Some(node) = self.nodes.get_mut(&best) {
            for (w, xi) in node.weights.iter_mut().zip(x) {
                *w = w.min(*xi);
            }
            promoted = node.observe(phi);
            permanent = node.permanent;
        }
        if promoted {
            debug!(node = %best, vigilance = self.vigilance, "node promoted to permanent");
        }

        let second = self.first_resonating(x, &ranked, Some(best));
        if let Some(sbm) = second {
            if let Some(node) = self.nodes.get_mut(&sbm) {
                // β (x ∧ w) + (1 − β) w, written so rounding can never grow w.
                for (w, xi) in node.weights.iter_mut().zip(x) {
                    *w -= beta * (*w - w.min(*xi));
                }
                if node.observe(phi) {
                    debug!(node = %sbm, vigilance = self.vigilance, "node promoted to permanent");
                }
            }
            self.link(best, sbm);
        }

        Ok(TrainOutcome::Resonated { best, second, promoted, permanent })
    }

    /// Best resonating node for `x` without learning anything.
    pub fn best_match(&self, x: &[f64]) -> Result<Option<NodeId>> {
        validate_sample(0, x, self.width)?;
        let ranked = self.rank(x);
        Ok(self.first_resonating(x, &ranked, None))
    }

    // ── Maintenance ──────────────────────────────────────────

    /// Delete every node that is still a candidate.
    ///
    /// Survivors keep their ids and weights; references to deleted nodes are
    /// removed from their neighbor sets. Returns the deleted ids, ascending.
    pub fn prune_candidates(&mut self) -> Vec<NodeId> {
        let removed: Vec<NodeId> = self.nodes
            .values()
            .filter(|n| !n.permanent)
            .map(|n| n.id)
            .collect();
        if removed.is_empty() {
            return removed;
        }

        for id in &removed {
            self.nodes.remove(id);
        }
        let gone: BTreeSet<NodeId> = removed.iter().copied().collect();
        for node in self.nodes.values_mut() {
            node.neighbors.retain(|nb| !gone.contains(nb));
        }

        debug!(
            vigilance = self.vigilance,
            pruned    = removed.len(),
            surviving = self.nodes.len(),
            "candidate nodes pruned"
        );
        removed
    }

    // ── Clusters ─────────────────────────────────────────────

    /// Connected components of the permanent-node subgraph.
    ///
    /// Candidates and every edge touching a candidate are ignored. Computed
    /// from the current state on each call.
    pub fn extract_clusters(&self) -> Vec<BTreeSet<NodeId>> {
        let permanent: BTreeSet<NodeId> = self.nodes
            .values()
            .filter(|n| n.permanent)
            .map(|n| n.id)
            .collect();
        let edges = self.nodes
            .values()
            .filter(|n| n.permanent)
            .flat_map(|n| n.neighbors.iter().map(move |nb| (n.id, *nb)));
        connected_components(&permanent, edges)
    }

    pub fn snapshot(&self) -> LayerSnapshot {
        LayerSnapshot {
            vigilance: self.vigilance,
            beta: self.beta,
            phi: self.phi,
            stats: self.stats(),
            nodes: self.nodes.values().cloned().collect(),
            clusters: self.extract_clusters(),
        }
    }

    // ── Internals ────────────────────────────────────────────

    /// Node ids by descending activation; `sort_by` is stable, so equal
    /// activations keep ascending-id order.
    fn rank(&self, x: &[f64]) -> Vec<NodeId> {
        let mut scored: Vec<(NodeId, f64)> = self.nodes
            .values()
            .map(|n| (n.id, activation(x, &n.weights)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.into_iter().map(|(id, _)| id).collect()
    }

    fn first_resonating(&self, x: &[f64], ranked: &[NodeId], skip: Option<NodeId>) -> Option<NodeId> {
        ranked
            .iter()
            .copied()
            .filter(|id| Some(*id) != skip)
            .find(|id| {
                self.nodes
                    .get(id)
                    .is_some_and(|n| match_score(x, &n.weights) >= self.vigilance)
            })
    }

    fn insert_node(&mut self, x: &[f64]) -> (NodeId, bool) {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let mut node = ArtNode::new(id, x);
        let permanent = node.promote_if_ready(self.phi);
        self.nodes.insert(id, node);
        debug!(node = %id, vigilance = self.vigilance, permanent, "node created");
        (id, permanent)
    }

    /// Both ends must be live; otherwise nothing is linked.
    fn link(&mut self, a: NodeId, b: NodeId) {
        if a == b || !self.nodes.contains_key(&a) || !self.nodes.contains_key(&b) {
            return;
        }
        let fresh = self.nodes.get_mut(&a).is_some_and(|n| n.neighbors.insert(b));
        if let Some(n) = self.nodes.get_mut(&b) {
            n.neighbors.insert(a);
        }
        if fresh {
            debug!(a = %a, b = %b, vigilance = self.vigilance, "topology edge created");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::complement_code;
    use crate::error::TopoArtError;

    fn cc(x: &[f64]) -> Vec<f64> {
        complement_code(x)
    }

    #[test]
    fn scores_follow_fuzzy_intersection() {
        let x = cc(&[0.9]);
        let w = cc(&[0.5]);
        // |x ∧ w| = min(.9,.5) + min(.1,.5) = 0.6
        assert!((match_score(&x, &w) - 0.6 / (1.0 + MATCH_EPSILON)).abs() < 1e-15);
        assert!((activation(&x, &w) - 0.6 / (1.0 + CHOICE_ALPHA)).abs() < 1e-12);
        let perfect = match_score(&x, &x);
        assert!(perfect < 1.0 && perfect > 1.0 - 1e-9);
        assert_eq!(match_score(&[0.0, 0.0], &[0.5, 0.5]), 0.0);
    }

    #[test]
    fn first_sample_creates_candidate() {
        let mut layer = ResonanceLayer::new(0.9, 0.5, 3).unwrap();
        let out = layer.train_sample(&cc(&[0.4, 0.6])).unwrap();
        assert_eq!(out, TrainOutcome::Created { node: NodeId(0), permanent: false });
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.width(), Some(4));
    }

    #[test]
    fn phi_of_one_makes_new_nodes_permanent() {
        let mut layer = ResonanceLayer::new(0.9, 0.5, 1).unwrap();
        let out = layer.train_sample(&cc(&[0.4])).unwrap();
        assert!(out.winner_permanent());
        assert!(!out.is_established());
        let out = layer.train_sample(&cc(&[0.9])).unwrap();
        assert_eq!(out.created(), Some(NodeId(1)));
        assert!(layer.node(NodeId(1)).unwrap().is_permanent());
    }

    #[test]
    fn rematch_keeps_weights_and_counts_up() {
        let mut layer = ResonanceLayer::new(0.9, 0.5, 10).unwrap();
        let x = cc(&[0.3, 0.8]);
        layer.train_sample(&x).unwrap();
        let before = layer.node(NodeId(0)).unwrap().weights().to_vec();
        let out = layer.train_sample(&x).unwrap();
        assert_eq!(out.winner(), NodeId(0));
        let node = layer.node(NodeId(0)).unwrap();
        assert_eq!(node.weights(), before.as_slice());
        assert_eq!(node.count(), 2);
    }

    #[test]
    fn full_update_contracts_to_intersection() {
        let mut layer = ResonanceLayer::new(0.5, 0.5, 10).unwrap();
        layer.train_sample(&cc(&[0.4])).unwrap();
        layer.train_sample(&cc(&[0.6])).unwrap();
        let w = layer.node(NodeId(0)).unwrap().weights();
        // min([.4,.6], [.6,.4]) = [.4,.4]
        assert!((w[0] - 0.4).abs() < 1e-12);
        assert!((w[1] - 0.4).abs() < 1e-12);
        let (lo, hi) = layer.node(NodeId(0)).unwrap().bounds();
        assert!((lo[0] - 0.4).abs() < 1e-12);
        assert!((hi[0] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn second_match_is_partially_updated_and_linked() {
        let mut layer = ResonanceLayer::new(0.75, 0.5, 10).unwrap();
        // Two nodes far enough apart (match 0.6) to be created separately.
        layer.train_sample(&cc(&[0.2])).unwrap();
        layer.train_sample(&cc(&[0.6])).unwrap();
        assert_eq!(layer.len(), 2);

        // 0.4 matches both at 0.8.
        let out = layer.train_sample(&cc(&[0.4])).unwrap();
        let TrainOutcome::Resonated { best, second: Some(second), .. } = out else {
            panic!("expected a resonance with a second match, got {out:?}");
        };
        assert_ne!(best, second);

        let b = layer.node(best).unwrap();
        let s = layer.node(second).unwrap();
        assert!(b.neighbors().contains(&second));
        assert!(s.neighbors().contains(&best));
        assert_eq!(b.count(), 2);
        assert_eq!(s.count(), 2);
        assert_eq!(layer.stats().edges, 1);

        // Partial update with β = 0.5 moves the second match half-way to the intersection.
        let x = cc(&[0.4]);
        let original = if second == NodeId(0) { cc(&[0.2]) } else { cc(&[0.6]) };
        for ((w, o), xi) in s.weights().iter().zip(&original).zip(&x) {
            let expected = 0.5 * o.min(*xi) + 0.5 * o;
            assert!((w - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn beta_zero_leaves_second_match_weights_alone() {
        let mut layer = ResonanceLayer::new(0.75, 0.0, 10).unwrap();
        layer.train_sample(&cc(&[0.2])).unwrap();
        layer.train_sample(&cc(&[0.6])).unwrap();
        let out = layer.train_sample(&cc(&[0.4])).unwrap();
        let TrainOutcome::Resonated { second: Some(second), .. } = out else {
            panic!("expected a second match");
        };
        let expected = if second == NodeId(0) { cc(&[0.2]) } else { cc(&[0.6]) };
        assert_eq!(layer.node(second).unwrap().weights(), expected.as_slice());
        assert_eq!(layer.node(second).unwrap().count(), 2);
    }

    #[test]
    fn no_second_match_means_no_edge() {
        let mut layer = ResonanceLayer::new(0.9, 0.5, 10).unwrap();
        layer.train_sample(&cc(&[0.1])).unwrap();
        layer.train_sample(&cc(&[0.9])).unwrap();
        let out = layer.train_sample(&cc(&[0.1])).unwrap();
        assert!(matches!(out, TrainOutcome::Resonated { second: None, .. }));
        assert_eq!(layer.stats().edges, 0);
    }

    #[test]
    fn activation_ties_keep_creation_order() {
        // Identical boxes tie on activation; the older node must win.
        let mut layer = ResonanceLayer::new(0.9, 0.5, 10).unwrap();
        layer.train_sample(&cc(&[0.5])).unwrap();
        // Insert an identical twin directly; training would merge it into node 0.
        layer.nodes.insert(NodeId(1), ArtNode::new(NodeId(1), &cc(&[0.5])));
        layer.next_id = 2;
        let out = layer.train_sample(&cc(&[0.5])).unwrap();
        assert!(matches!(out, TrainOutcome::Resonated { best: NodeId(0), second: Some(NodeId(1)), .. }));
    }

    #[test]
    fn pruning_removes_candidates_and_dangling_edges() {
        let mut layer = ResonanceLayer::new(0.75, 0.5, 3).unwrap();
        layer.train_sample(&cc(&[0.2])).unwrap(); // node0
        layer.train_sample(&cc(&[0.6])).unwrap(); // node1
        layer.train_sample(&cc(&[0.2])).unwrap(); // node0 → count 2
        layer.train_sample(&cc(&[0.2])).unwrap(); // node0 → count 3, permanent
        assert!(layer.node(NodeId(0)).unwrap().is_permanent());

        let out = layer.train_sample(&cc(&[0.4])).unwrap();
        assert!(matches!(out, TrainOutcome::Resonated { second: Some(_), .. }));

        let before: Vec<ArtNode> = layer.nodes().filter(|n| n.is_permanent()).cloned().collect();
        let removed = layer.prune_candidates();
        assert!(!removed.is_empty());
        for n in layer.nodes() {
            assert!(n.is_permanent());
            assert!(n.neighbors().iter().all(|nb| layer.node(*nb).is_some()));
        }
        for old in &before {
            let now = layer.node(old.id()).expect("permanent node survives");
            assert_eq!(now.weights(), old.weights());
        }
    }

    #[test]
    fn ids_are_never_reused_after_pruning() {
        let mut layer = ResonanceLayer::new(0.95, 0.5, 5).unwrap();
        layer.train_sample(&cc(&[0.1])).unwrap();
        layer.train_sample(&cc(&[0.9])).unwrap();
        assert_eq!(layer.prune_candidates(), vec![NodeId(0), NodeId(1)]);
        let out = layer.train_sample(&cc(&[0.5])).unwrap();
        assert_eq!(out.created(), Some(NodeId(2)));
    }

    #[test]
    fn pruning_leaves_only_permanent_nodes() {
        let mut layer = ResonanceLayer::new(0.95, 0.5, 2).unwrap();
        layer.train_sample(&cc(&[0.1])).unwrap();
        layer.train_sample(&cc(&[0.1])).unwrap(); // node0 permanent
        let out = layer.train_sample(&cc(&[0.9])).unwrap(); // node1 fresh candidate
        assert_eq!(out.created(), Some(NodeId(1)));

        assert_eq!(layer.prune_candidates(), vec![NodeId(1)]);
        assert!(layer.nodes().all(|n| n.is_permanent()));
        assert_eq!(layer.len(), 1);
    }

    #[test]
    fn clusters_exclude_candidates() {
        let mut layer = ResonanceLayer::new(0.75, 0.5, 2).unwrap();
        layer.train_sample(&cc(&[0.2])).unwrap(); // node0
        layer.train_sample(&cc(&[0.2])).unwrap(); // node0 permanent
        layer.train_sample(&cc(&[0.6])).unwrap(); // node1 candidate
        assert_eq!(layer.extract_clusters(), vec![BTreeSet::from([NodeId(0)])]);

        layer.train_sample(&cc(&[0.6])).unwrap(); // node1 permanent
        layer.train_sample(&cc(&[0.4])).unwrap(); // links node0 - node1
        assert_eq!(
            layer.extract_clusters(),
            vec![BTreeSet::from([NodeId(0), NodeId(1)])]
        );
    }

    #[test]
    fn rejects_bad_input_without_mutating() {
        let mut layer = ResonanceLayer::new(0.9, 0.5, 2).unwrap();
        layer.train_sample(&cc(&[0.5])).unwrap();
        let stats = layer.stats();

        assert!(matches!(
            layer.train_sample(&cc(&[0.5, 0.5])),
            Err(TopoArtError::DimensionMismatch { expected: 2, got: 4 })
        ));
        assert!(matches!(
            layer.train_sample(&[f64::NAN, 0.5]),
            Err(TopoArtError::InvalidInput { .. })
        ));
        assert!(layer.best_match(&[1.5, -0.5]).is_err());
        assert_eq!(layer.stats(), stats);
    }

    #[test]
    fn constructor_validates_parameters() {
        assert!(ResonanceLayer::new(0.0, 0.5, 1).is_err());
        assert!(ResonanceLayer::new(0.5, -0.1, 1).is_err());
        assert!(ResonanceLayer::new(0.5, 0.5, 0).is_err());
        assert!(ResonanceLayer::new(1.0, 1.0, 1).is_ok());
    }

    #[test]
    fn vigilance_one_never_resonates() {
        let mut layer = ResonanceLayer::new(1.0, 0.5, 2).unwrap();
        let x = cc(&[0.37, 0.91]);
        layer.train_sample(&x).unwrap();
        let out = layer.train_sample(&x).unwrap();
        assert_eq!(out, TrainOutcome::Created { node: NodeId(1), permanent: false });
    }

    #[test]
    fn match_exactly_at_vigilance_falls_short() {
        // |x ∧ w| = 0.6 and |x| = 1, so the offset puts the score just under 0.6.
        let mut layer = ResonanceLayer::new(0.6, 0.5, 5).unwrap();
        layer.train_sample(&cc(&[0.5])).unwrap();
        let out = layer.train_sample(&cc(&[0.9])).unwrap();
        assert_eq!(out.created(), Some(NodeId(1)));
        assert_eq!(layer.len(), 2);
    }

    #[test]
    fn rejected_sample_reports_index_zero() {
        let mut layer = ResonanceLayer::new(0.9, 0.5, 2).unwrap();
        for _ in 0..5 {
            layer.train_sample(&cc(&[0.5])).unwrap();
        }
        assert!(matches!(
            layer.train_sample(&[0.5, 1.5]),
            Err(TopoArtError::InvalidInput { index: 0, .. })
        ));
    }

    #[test]
    fn best_match_is_read_only() {
        let mut layer = ResonanceLayer::new(0.9, 0.5, 5).unwrap();
        assert_eq!(layer.best_match(&cc(&[0.5])).unwrap(), None);
        layer.train_sample(&cc(&[0.5])).unwrap();
        let before = layer.snapshot();
        assert_eq!(layer.best_match(&cc(&[0.5])).unwrap(), Some(NodeId(0)));
        assert_eq!(layer.best_match(&cc(&[0.9])).unwrap(), None);
        assert_eq!(layer.snapshot(), before);
    }
}
