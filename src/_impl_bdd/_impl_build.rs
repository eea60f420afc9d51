use crate::formula::Formula;
use crate::*;

/// Construction of the naive (unreduced) decision tree for a formula.
impl Bdd {
    /// The default ceiling on the number of distinct literals accepted by
    /// [`Bdd::build`]. The naive tree has `2^n` leaves, so this bound is the
    /// explicit protection against silently exhausting memory.
    pub const DEFAULT_LITERAL_LIMIT: u16 = 20;

    /// Above this many literals, a build is still accepted but logged as a
    /// warning, since it already allocates millions of nodes.
    const WARN_LITERAL_THRESHOLD: u16 = 12;

    /// Build the naive decision tree of the given formula over the given
    /// literal order, with the default literal-count ceiling.
    ///
    /// The result tests `order` literals in order on every root-to-leaf
    /// path; leaves are the two shared terminal nodes. The tree is
    /// exponential by construction: `2^n - 1` decision nodes plus the two
    /// terminals. Use [`Bdd::reduce`] to canonicalize it.
    pub fn build(formula: &Formula, order: &LiteralOrder) -> Result<Bdd, Error> {
        Bdd::build_with_limit(formula, order, Bdd::DEFAULT_LITERAL_LIMIT)
    }

    /// The same as [`Bdd::build`], but with an explicit literal-count
    /// ceiling. Orders with more than `limit` literals are rejected with
    /// [`Error::TooManyLiterals`].
    pub fn build_with_limit(
        formula: &Formula,
        order: &LiteralOrder,
        limit: u16,
    ) -> Result<Bdd, Error> {
        let num_literals = order.num_literals();
        if num_literals > limit {
            return Err(Error::TooManyLiterals {
                count: usize::from(num_literals),
                limit: usize::from(limit),
            });
        }
        if num_literals > Bdd::WARN_LITERAL_THRESHOLD {
            log::warn!(
                "Building a naive decision tree over {} literals ({} assignments).",
                num_literals,
                1u64 << u32::from(num_literals)
            );
        }
        if num_literals == 0 {
            // No literals means a single empty assignment.
            let value = formula.evaluate(&Assignment::new())?;
            return Ok(if value {
                Bdd::mk_true(0)
            } else {
                Bdd::mk_false(0)
            });
        }
        let mut assignments = order.assignments();
        let mut bdd = Bdd::mk_true(num_literals);
        build_subtree(formula, order, 0, &mut assignments, &mut bdd)?;
        if cfg!(feature = "shields_up") && assignments.next().is_some() {
            panic!("The assignment enumerator was not fully consumed.");
        }
        Ok(bdd)
    }
}

/// **(internal)** Build the subtree rooted at the given depth, consuming
/// leaf assignments from the shared enumerator.
///
/// The low subtree is built first and the high subtree second, so the leaves
/// are visited in exactly the enumerator's order: the assignments with bit 0
/// at this depth feed the low branch, the ones with bit 1 the high branch.
/// Nodes are pushed after both children (post-order), which keeps the arena
/// in children-before-parents order with the root last.
fn build_subtree(
    formula: &Formula,
    order: &LiteralOrder,
    depth: u16,
    assignments: &mut AssignmentIterator<'_>,
    out: &mut Bdd,
) -> Result<BddPointer, Error> {
    if depth == order.num_literals() {
        let assignment = assignments
            .next()
            .expect("The assignment enumerator ran out before the decision tree was complete.");
        let value = formula.evaluate(&assignment)?;
        return Ok(BddPointer::from_bool(value));
    }
    let low_link = build_subtree(formula, order, depth + 1, assignments, out)?;
    let high_link = build_subtree(formula, order, depth + 1, assignments, out)?;
    out.push_node(BddNode::mk_node(
        BddVariable::from_index(usize::from(depth)),
        low_link,
        high_link,
    ));
    Ok(out.root_pointer())
}
