use crate::*;

/// Several useful (mostly internal) low-level utility methods for `Bdd`s.
impl Bdd {
    /// The number of nodes in this `Bdd`, terminals included.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Number of literals in the corresponding `LiteralOrder`.
    pub fn num_literals(&self) -> u16 {
        // Every BDD has at least the zero terminal, which stores the
        // literal count as its variable.
        self.0[0].var.0
    }

    /// Pointer to the root of the decision diagram.
    ///
    /// Nodes are stored children-before-parents, so the root is always the
    /// last node of the array.
    pub fn root_pointer(&self) -> BddPointer {
        BddPointer::from_index(self.0.len() - 1)
    }

    /// Get the low link of the node at a specified location.
    pub fn low_link_of(&self, node: BddPointer) -> BddPointer {
        self.0[node.to_index()].low_link
    }

    /// Get the high link of the node at a specified location.
    pub fn high_link_of(&self, node: BddPointer) -> BddPointer {
        self.0[node.to_index()].high_link
    }

    /// Get the conditioning variable of the node at a specified location.
    ///
    /// Note that this also technically works for terminals, but the returned
    /// `BddVariable` is not a valid position in the literal order.
    pub fn var_of(&self, node: BddPointer) -> BddVariable {
        self.0[node.to_index()].var
    }

    /// **(internal)** Create a new `Bdd` for the constant `false` function.
    pub(crate) fn mk_false(num_literals: u16) -> Bdd {
        Bdd(vec![BddNode::mk_zero(num_literals)])
    }

    /// **(internal)** Create a new `Bdd` holding just the two shared
    /// terminals (which is also the constant `true` function).
    pub(crate) fn mk_true(num_literals: u16) -> Bdd {
        Bdd(vec![
            BddNode::mk_zero(num_literals),
            BddNode::mk_one(num_literals),
        ])
    }

    /// **(internal)** Add a new node to this `Bdd`, making it the root.
    pub(crate) fn push_node(&mut self, node: BddNode) {
        self.0.push(node);
    }

    /// **(internal)** An iterator over all pointers of this `Bdd`, in the
    /// children-before-parents storage order.
    pub(crate) fn pointers(&self) -> impl Iterator<Item = BddPointer> {
        (0..self.0.len()).map(BddPointer::from_index)
    }

    /// Evaluate this `Bdd` under the given assignment by following links
    /// from the root until a terminal is reached.
    ///
    /// Fails with [`Error::UnboundLiteral`] if a decision literal on the
    /// path is missing from the assignment. Works for both naive and
    /// reduced diagrams.
    pub fn eval_in(&self, assignment: &Assignment, order: &LiteralOrder) -> Result<bool, Error> {
        let mut node = self.root_pointer();
        while !node.is_terminal() {
            let name = order.name_of(self.var_of(node));
            let value = assignment
                .value(name)
                .ok_or_else(|| Error::UnboundLiteral(name.to_string()))?;
            node = if value {
                self.high_link_of(node)
            } else {
                self.low_link_of(node)
            };
        }
        Ok(node.is_one())
    }
}
