use crate::*;
use fxhash::FxBuildHasher;

/// Canonicalization of naive decision trees into shared DAGs.
impl Bdd {
    /// Merge structurally identical subtrees of this `Bdd` into single
    /// shared nodes, bottom-up.
    ///
    /// Every node receives a stable canonical identity: terminals are keyed
    /// by their boolean value (collapsing all leaf occurrences into the two
    /// shared terminals), and decision nodes are keyed by the identity pair
    /// of their already-canonicalized `(low, high)` children. The key
    /// deliberately does *not* include the decision literal, and a node
    /// whose canonical children coincide is kept as a regular `(x, x)`
    /// entry rather than elided — both rules match the renderer contract
    /// (a kept node shows up with a merged `F/T` edge) and keep the output
    /// graphs stable.
    ///
    /// The pass is a single forward scan with memoization: the arena stores
    /// children before parents, so every node only looks up identities that
    /// are already resolved. Reducing an already-reduced `Bdd` returns an
    /// identical structure.
    pub fn reduce(&self) -> Bdd {
        if self.size() <= 2 {
            return self.clone();
        }
        let mut result = Bdd::mk_true(self.num_literals());
        // Canonical identity of every already-processed node, indexed by the
        // old pointer value.
        let mut canonical: Vec<BddPointer> = Vec::with_capacity(self.size());
        canonical.push(BddPointer::zero());
        canonical.push(BddPointer::one());
        // First-seen canonical node for each `(low, high)` identity pair.
        let mut existing: HashMap<(BddPointer, BddPointer), BddPointer, FxBuildHasher> =
            HashMap::with_capacity_and_hasher(self.size(), FxBuildHasher::default());
        for pointer in self.pointers().skip(2) {
            let low_link = canonical[self.low_link_of(pointer).to_index()];
            let high_link = canonical[self.high_link_of(pointer).to_index()];
            let key = (low_link, high_link);
            if let Some(merged) = existing.get(&key) {
                canonical.push(*merged);
            } else {
                result.push_node(BddNode::mk_node(self.var_of(pointer), low_link, high_link));
                existing.insert(key, result.root_pointer());
                canonical.push(result.root_pointer());
            }
        }
        // The old root is the only node of its level, so it cannot merge
        // into an earlier entry and stays the last node of the result.
        if cfg!(feature = "shields_up") && canonical[self.root_pointer().to_index()] != result.root_pointer() {
            panic!("The root of the reduced Bdd is not the last node.");
        }
        log::debug!(
            "Reduced a decision diagram with {} nodes to {} nodes.",
            self.size(),
            result.size()
        );
        result
    }
}
