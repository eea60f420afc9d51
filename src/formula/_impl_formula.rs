use super::{parse, Formula, Op};
use crate::Error;
use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

impl TryFrom<&str> for Formula {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// The `Display` implementation re-serializes a formula with full
/// parenthesization, so that parsing the output again yields a structurally
/// identical tree.
impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Literal(name) => write!(f, "{}", name),
            Formula::Operator(op, children) => match (op, children.as_slice()) {
                (Op::Not, [operand]) => write!(f, "(NOT {})", operand),
                (_, [left, right]) => write!(f, "({} {} {})", left, op, right),
                _ => {
                    // Arity-violating trees cannot come from the parser, but
                    // they are representable; print them in prefix form.
                    write!(f, "({}", op)?;
                    for child in children {
                        write!(f, " {}", child)?;
                    }
                    write!(f, ")")
                }
            },
        }
    }
}

impl Formula {
    /// Make a new leaf holding the given literal name.
    pub fn mk_literal(name: &str) -> Formula {
        Formula::Literal(name.to_string())
    }

    /// Make a new negation node.
    pub fn mk_not(operand: Formula) -> Formula {
        Formula::Operator(Op::Not, vec![operand])
    }

    /// Make a new binary operator node.
    pub fn mk_binary(op: Op, left: Formula, right: Formula) -> Formula {
        Formula::Operator(op, vec![left, right])
    }

    /// The literal names of this formula in first-occurrence order (left to
    /// right). This is the order the whole pipeline uses when no explicit
    /// [`crate::LiteralOrder`] is given.
    pub fn literals(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_literals(&mut names);
        names
    }

    fn collect_literals(&self, out: &mut Vec<String>) {
        match self {
            Formula::Literal(name) => {
                if !out.iter().any(|existing| existing == name) {
                    out.push(name.clone());
                }
            }
            Formula::Operator(_, children) => {
                for child in children {
                    child.collect_literals(out);
                }
            }
        }
    }
}
