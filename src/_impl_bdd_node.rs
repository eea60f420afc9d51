use super::*;

impl BddNode {
    /// Make a new `false` terminal node.
    pub fn mk_zero(num_literals: u16) -> BddNode {
        BddNode {
            var: BddVariable(num_literals),
            low_link: BddPointer::zero(),
            high_link: BddPointer::zero(),
        }
    }

    /// Make a new `true` terminal node.
    pub fn mk_one(num_literals: u16) -> BddNode {
        BddNode {
            var: BddVariable(num_literals),
            low_link: BddPointer::one(),
            high_link: BddPointer::one(),
        }
    }

    /// Make a new decision node.
    ///
    /// *Assumptions:*
    ///  - `low_link` and `high_link` are pointers in the same `Bdd` array.
    ///  - The returned node will be added to the same `Bdd` where `low_link`
    ///    and `high_link` are pointers.
    pub fn mk_node(var: BddVariable, low_link: BddPointer, high_link: BddPointer) -> BddNode {
        BddNode {
            var,
            low_link,
            high_link,
        }
    }
}
