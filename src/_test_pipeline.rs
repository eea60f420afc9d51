use crate::formula::{parse, tokenize, Formula, Op};
use crate::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn pipeline_example_formula() {
    let input = "(A AND (B OR (NOT C)))";
    assert_eq!(
        vec!["(", "A", "AND", "(", "B", "OR", "(", "NOT", "C", ")", ")", ")"],
        tokenize(input)
    );
    let formula = parse(input).unwrap();
    assert_eq!(input, formula.to_string());

    let order = LiteralOrder::from_formula(&formula);
    assert_eq!(&["A", "B", "C"], order.names());

    let mut assignment = Assignment::new();
    assignment.set("A", true);
    assignment.set("B", false);
    assignment.set("C", true);
    assert_eq!(false, formula.evaluate(&assignment).unwrap());
    assignment.set("C", false);
    assert_eq!(true, formula.evaluate(&assignment).unwrap());

    let naive = Bdd::build(&formula, &order).unwrap();
    assert_eq!(9, naive.size());
    let reduced = naive.reduce();
    assert_eq!(8, reduced.size());
    for assignment in order.assignments() {
        let expected = formula.evaluate(&assignment).unwrap();
        assert_eq!(expected, naive.eval_in(&assignment, &order).unwrap());
        assert_eq!(expected, reduced.eval_in(&assignment, &order).unwrap());
    }

    let graph = GraphDescription::from_bdd(&reduced, &order);
    assert_eq!(reduced.size(), graph.ids.len());
    assert_eq!(2, graph.colors.len());
}

#[test]
fn pipeline_single_literal() {
    let formula = parse("A").unwrap();
    let order = LiteralOrder::from_formula(&formula);
    let reduced = Bdd::build(&formula, &order).unwrap().reduce();
    assert_eq!(3, reduced.size());
    let root = reduced.root_pointer();
    assert_eq!(BddPointer::zero(), reduced.low_link_of(root));
    assert_eq!(BddPointer::one(), reduced.high_link_of(root));
}

#[test]
fn pipeline_error_messages() {
    // The user-facing messages of the most common failure modes.
    assert_eq!(
        "No boolean expression provided.",
        parse("   ").unwrap_err().to_string()
    );
    assert_eq!(
        "Unexpected end of input.",
        parse("(A AND").unwrap_err().to_string()
    );
    let formula = parse("(A AND B)").unwrap();
    let mut assignment = Assignment::new();
    assignment.set("A", true);
    assert_eq!(
        "Literal 'B' has no assigned truth value.",
        formula.evaluate(&assignment).unwrap_err().to_string()
    );
}

/// Make a random formula over the literals `A..D` with the given maximum
/// nesting depth.
fn mk_random_formula(rng: &mut StdRng, depth: u32) -> Formula {
    const NAMES: [&str; 4] = ["A", "B", "C", "D"];
    const BINARY: [Op; 4] = [Op::And, Op::Or, Op::Imp, Op::Iff];
    if depth == 0 || rng.gen_range(0, 4) == 0 {
        return Formula::mk_literal(NAMES[rng.gen_range(0, NAMES.len())]);
    }
    if rng.gen_range(0, 5) == 0 {
        return Formula::mk_not(mk_random_formula(rng, depth - 1));
    }
    let op = BINARY[rng.gen_range(0, BINARY.len())];
    let left = mk_random_formula(rng, depth - 1);
    let right = mk_random_formula(rng, depth - 1);
    Formula::mk_binary(op, left, right)
}

#[test]
fn fuzz_pipeline_consistency() {
    // For a collection of random formulas, check that (a) serialization
    // round-trips through the parser, (b) the naive tree, the reduced
    // diagram and the direct evaluator agree on every assignment, and
    // (c) reduction is idempotent.
    let mut rng = StdRng::seed_from_u64(1234567890);
    for _ in 0..100 {
        let formula = mk_random_formula(&mut rng, 4);
        assert_eq!(formula, parse(&formula.to_string()).unwrap());
        let order = LiteralOrder::from_formula(&formula);
        let naive = Bdd::build(&formula, &order).unwrap();
        let reduced = naive.reduce();
        assert!(reduced.size() <= naive.size());
        assert_eq!(reduced, reduced.reduce());
        for assignment in order.assignments() {
            let expected = formula.evaluate(&assignment).unwrap();
            assert_eq!(expected, naive.eval_in(&assignment, &order).unwrap());
            assert_eq!(expected, reduced.eval_in(&assignment, &order).unwrap());
        }
    }
}
