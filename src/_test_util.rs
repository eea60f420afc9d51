use crate::*;

/// Make a small naive `Bdd` fixture by hand, used in utility tests.
///
/// The fixture encodes the "A" projection over the order `[A, B]`: both
/// `B` nodes are degenerate (their links agree), and the root decides on
/// `A`. It is exactly what `Bdd::build` produces for the formula `A`.
pub fn mk_small_naive_bdd() -> Bdd {
    let mut bdd = Bdd::mk_true(2);
    // Low subtree of the root: both leaves are false.
    bdd.push_node(BddNode::mk_node(
        BddVariable::from_index(1),
        BddPointer::zero(),
        BddPointer::zero(),
    ));
    // High subtree of the root: both leaves are true.
    bdd.push_node(BddNode::mk_node(
        BddVariable::from_index(1),
        BddPointer::one(),
        BddPointer::one(),
    ));
    bdd.push_node(BddNode::mk_node(
        BddVariable::from_index(0),
        BddPointer::from_index(2),
        BddPointer::from_index(3),
    ));
    bdd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::parse;

    #[test]
    fn fixture_matches_the_builder() {
        let formula = parse("A").unwrap();
        let order = LiteralOrder::new(&["A", "B"]);
        assert_eq!(Bdd::build(&formula, &order).unwrap(), mk_small_naive_bdd());
    }
}
