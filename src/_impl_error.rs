use crate::formula::Op;
use crate::Error;
use std::fmt::{Display, Formatter};

/// The single human-readable message surfaced to the caller in place of the
/// graph output.
impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "No boolean expression provided."),
            Error::UnexpectedEof => write!(f, "Unexpected end of input."),
            Error::Syntax(message) => write!(f, "{}", message),
            Error::TrailingInput => write!(
                f,
                "Extra tokens after the end of the expression \
                 (did you forget to enclose the whole input in brackets?)."
            ),
            Error::Arity { op, actual } => write!(
                f,
                "Incorrect number of arguments to {}: {} takes {}, got {}.",
                op,
                op,
                arity_description(*op),
                actual
            ),
            Error::UnboundLiteral(name) => {
                write!(f, "Literal '{}' has no assigned truth value.", name)
            }
            Error::TooManyLiterals { count, limit } => write!(
                f,
                "The formula uses {} literals; refusing to build a decision \
                 tree with more than 2^{} leaves.",
                count, limit
            ),
        }
    }
}

impl std::error::Error for Error {}

/// **(internal)** The required operand count of an operator, in words.
fn arity_description(op: Op) -> &'static str {
    match op {
        Op::Not => "exactly one argument",
        Op::And | Op::Or => "at least two arguments",
        Op::Imp | Op::Iff => "exactly two arguments",
    }
}
