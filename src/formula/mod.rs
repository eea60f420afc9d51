//! Formulas are explicit tree representations of fully parenthesized boolean
//! expressions over the five operator keywords `NOT`, `AND`, `OR`, `IMP` and
//! `IFF`.
//!
//! They are parsed from a string representation (using `TryFrom` or
//! [`parse`]) and evaluated or compiled into `Bdd`s:
//!
//! ```rust
//! use boolform::formula::Formula;
//! use std::convert::TryFrom;
//! let f = Formula::try_from("((A IMP B) IFF (NOT A))").unwrap();
//! ```

/// **(internal)** Tokenizer and parsing functions for formulas.
mod _impl_parser;

/// **(internal)** Display, conversions and utility methods for `Formula`.
mod _impl_formula;

/// **(internal)** Evaluation of formulas under truth assignments.
mod _impl_evaluator;

pub use self::_impl_parser::{parse, parse_tokens, tokenize};

/// One of the five operator keywords, each with a fixed required arity
/// (`NOT`: exactly one operand, `AND`/`OR`: at least two, `IMP`/`IFF`:
/// exactly two).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Op {
    Not,
    And,
    Or,
    Imp,
    Iff,
}

impl Op {
    /// The fixed operator-keyword table. Process-wide constant configuration.
    pub const ALL: [Op; 5] = [Op::Not, Op::And, Op::Or, Op::Imp, Op::Iff];

    /// The ASCII keyword of this operator, as it appears in expressions.
    pub fn keyword(self) -> &'static str {
        match self {
            Op::Not => "NOT",
            Op::And => "AND",
            Op::Or => "OR",
            Op::Imp => "IMP",
            Op::Iff => "IFF",
        }
    }

    /// Resolve an operator from its (case-sensitive) keyword.
    pub fn from_keyword(token: &str) -> Option<Op> {
        Op::ALL.iter().copied().find(|op| op.keyword() == token)
    }
}

/// Recursive type for the formula tree.
///
/// A formula is either a *leaf* holding a literal name (any token that is not
/// an operator keyword or a bracket), or an *internal* node holding an
/// operator and its ordered operands. The tree exclusively owns its children
/// and is immutable once parsed.
///
/// Note that operand counts are deliberately not encoded in the type: the
/// parser accepts any of the five keywords in binary-operator position, so a
/// two-operand `NOT` node is representable and is only rejected during
/// evaluation with an arity error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Formula {
    Literal(String),
    Operator(Op, Vec<Formula>),
}
