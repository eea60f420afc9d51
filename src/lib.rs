//! # Boolform
//!
//! This crate implements a small propositional-logic engine: it parses fully
//! parenthesized boolean expressions (`NOT`, `AND`, `OR`, `IMP`, `IFF`) into a
//! formula tree, evaluates formulas under arbitrary truth assignments, and
//! compiles them into [binary decision diagrams](https://en.wikipedia.org/wiki/Binary_decision_diagram)
//! (BDDs) by first enumerating the full decision tree over a fixed literal
//! order and then merging structurally identical subtrees into a shared DAG.
//!
//! Every `Bdd` owns its memory as a plain node array, which makes the
//! structures trivial to inspect, compare and hand over to an external
//! graph renderer via [`GraphDescription`].
//!
//! ```rust
//! use boolform::*;
//! use boolform::formula::Formula;
//! use std::convert::TryFrom;
//!
//! let formula = Formula::try_from("(A AND (B OR (NOT C)))").unwrap();
//! let order = LiteralOrder::from_formula(&formula);
//! assert_eq!(3, order.num_literals());
//!
//! // Evaluation under one concrete assignment:
//! let mut assignment = Assignment::new();
//! assignment.set("A", true);
//! assignment.set("B", false);
//! assignment.set("C", true);
//! assert_eq!(false, formula.evaluate(&assignment).unwrap());
//!
//! // Naive decision tree (2^3 leaves) and its canonicalized form:
//! let naive = Bdd::build(&formula, &order).unwrap();
//! let reduced = naive.reduce();
//! assert_eq!(9, naive.size());
//! assert_eq!(8, reduced.size());
//!
//! // The boundary artifact consumed by the external renderer:
//! let graph = GraphDescription::from_bdd(&reduced, &order);
//! assert_eq!(2, graph.colors.len()); // only terminals are colored
//! ```
//!

use std::collections::{BTreeMap, HashMap};

use crate::formula::Op;

pub mod formula;

/// **(internal)** Implementations for the crate-level `Error`.
mod _impl_error;

/// **(internal)** Implementation of the `BddPointer`.
mod _impl_bdd_pointer;

/// **(internal)** Implementation of the `BddNode`.
mod _impl_bdd_node;

/// **(internal)** Implementation of the `BddVariable`.
mod _impl_bdd_variable;

/// **(internal)** Implementation of the `LiteralOrder`.
mod _impl_literal_order;

/// **(internal)** Implementation of the `Assignment` and `AssignmentIterator`.
mod _impl_assignment;

/// **(internal)** Implementations for the `Bdd` struct.
mod _impl_bdd;

/// **(internal)** Implementation of the `GraphDescription`.
mod _impl_graph_description;

/// Several basic utility methods for testing.
#[cfg(test)]
mod _test_util;

/// **(internal)** End-to-end scenarios exercising the whole pipeline.
#[cfg(test)]
mod _test_pipeline;

/// An array-based encoding of a binary decision diagram.
///
/// A `Bdd` is created from a [`formula::Formula`] and a [`LiteralOrder`]
/// using [`Bdd::build`] (the naive, exponential decision tree) and
/// canonicalized using [`Bdd::reduce`]. Nodes are stored
/// children-before-parents; the root is always the last node of the array.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Bdd(Vec<BddNode>);

/// Identifies one of the literals that can appear as a decision condition
/// in a `Bdd`. It is an index into the corresponding [`LiteralOrder`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BddVariable(u16);

/// A type-safe index into the `Bdd` node array representation.
///
/// Index `0` is the shared `false` terminal and index `1` is the shared
/// `true` terminal; both are pre-allocated exactly once per `Bdd`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BddPointer(u32);

/// **(internal)** Representation of individual vertices of the `Bdd`
/// directed acyclic graph.
///
/// A `BddNode` either tests one literal, with a `low_link` (value `false`)
/// and a `high_link` (value `true`) leading to other nodes of the same
/// array, or it is one of the two terminal nodes. Terminals are encoded
/// with self-loop links and `var` set to the number of literals, so that
/// they remain valid nodes without a real decision variable.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
struct BddNode {
    pub var: BddVariable,
    pub low_link: BddPointer,
    pub high_link: BddPointer,
}

/// Maintains the ordered list of literal names over which formulas are
/// compiled into `Bdd`s, together with a reverse name→index mapping.
///
/// The order is load-bearing: it fixes which literal is tested at each level
/// of the decision tree and which half of the assignment sequence feeds the
/// low/high branches. It is typically derived from a formula by first
/// occurrence using [`LiteralOrder::from_formula`].
#[derive(Clone, Debug)]
pub struct LiteralOrder {
    literal_names: Vec<String>,
    literal_index_mapping: HashMap<String, u16>,
}

/// A mapping from literal names to boolean values, used to evaluate
/// formulas. Evaluating a formula whose literal is missing from the
/// assignment fails with [`Error::UnboundLiteral`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Assignment(HashMap<String, bool>);

/// Exhaustively iterates over all `2^n` assignments of a [`LiteralOrder`]
/// with `n` literals.
///
/// Assignment index `i` sets the literal at position `k` to bit
/// `(i >> (n - 1 - k)) & 1`, i.e. the *first* literal of the order varies
/// slowest. Be aware of the exponential number of iterations!
#[derive(Clone)]
pub struct AssignmentIterator<'a> {
    order: &'a LiteralOrder,
    next_index: u64,
}

/// A plain graph description handed to the external rendering component:
/// node ids with display labels, ordered edge lists, and optional node
/// colors (only BDD terminals are colored).
///
/// The artifact is produced fresh per request and owned by the caller. The
/// `BTreeMap` representation keeps it deterministic.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphDescription {
    pub ids: BTreeMap<u32, String>,
    pub edges: BTreeMap<u32, Vec<GraphEdge>>,
    pub colors: BTreeMap<u32, String>,
}

/// One outgoing edge of a [`GraphDescription`] node. BDD edges carry an
/// `F`/`T` branch label (or a merged `F/T` label when both branches lead to
/// the same node); formula-tree edges carry no label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphEdge {
    pub target: u32,
    pub label: Option<&'static str>,
}

/// The error type shared by all fallible operations of this crate.
///
/// Every failure is reported immediately to the caller ("first error wins");
/// there is no recovery or partial result. The `Display` implementation
/// produces the single human-readable message surfaced to the user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// No expression was given at all.
    EmptyInput,
    /// The token stream ended in the middle of an expression.
    UnexpectedEof,
    /// A grammar violation, with a human-readable description.
    Syntax(String),
    /// Unconsumed tokens remained after a complete top-level expression.
    TrailingInput,
    /// An operator was applied to the wrong number of operands.
    Arity { op: Op, actual: usize },
    /// Evaluation encountered a literal missing from the assignment.
    UnboundLiteral(String),
    /// Building the naive decision tree would exceed the literal-count
    /// ceiling (the tree has `2^count` leaves).
    TooManyLiterals { count: usize, limit: usize },
}
