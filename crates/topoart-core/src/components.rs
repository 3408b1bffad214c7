//! Connected components over node identifiers.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::node::NodeId;

/// Disjoint-set forest over dense indices `0..n`.
///
/// Union by size, path halving in `root`.
struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    fn with_len(n: usize) -> Self {
        Self { parent: (0..n).collect(), size: vec![1; n] }
    }

    fn root(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            let grand = self.parent[self.parent[i]];
            self.parent[i] = grand;
            i = grand;
        }
        i
    }

    /// Returns `false` when `a` and `b` already shared a set.
    fn merge(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.root(a), self.root(b));
        if ra == rb {
            return false;
        }
        let (big, small) = if self.size[ra] >= self.size[rb] { (ra, rb) } else { (rb, ra) };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        true
    }
}

/// Undirected connected components of the graph induced on `members`.
///
/// Edges with an endpoint outside `members` are ignored. Each component is
/// returned sorted ascending, and components are ordered by their smallest
/// member, so the output is deterministic for a given input.
pub fn connected_components<I>(members: &BTreeSet<NodeId>, edges: I) -> Vec<BTreeSet<NodeId>>
where
    I: IntoIterator<Item = (NodeId, NodeId)>,
{
    if members.is_empty() {
        return Vec::new();
    }

    let ids: Vec<NodeId> = members.iter().copied().collect();
    let id_to_idx: HashMap<NodeId, usize> = ids.iter()
        .enumerate()
        .map(|(i, id)| (*id, i))
        .collect();

    let mut sets = DisjointSets::with_len(ids.len());
    for (a, b) in edges {
        if let (Some(&i), Some(&j)) = (id_to_idx.get(&a), id_to_idx.get(&b)) {
            sets.merge(i, j);
        }
    }

    // `ids` is ascending, so the first member seen for a root is its minimum
    // and BTreeMap keyed on that minimum yields the output order.
    let mut root_to_min: HashMap<usize, NodeId> = HashMap::new();
    let mut groups: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();
    for (i, id) in ids.iter().enumerate() {
        let root = sets.root(i);
        let key = *root_to_min.entry(root).or_insert(*id);
        groups.entry(key).or_default().insert(*id);
    }

    groups.into_values().collect()
}
