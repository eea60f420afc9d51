use super::{Formula, Op};
use crate::{Assignment, Error};

/// Evaluation of formulas under truth assignments.
impl Formula {
    /// Evaluate this formula under the given assignment.
    ///
    /// Children are evaluated left to right before their operator is applied
    /// (post-order). `AND` and `OR` fold over their operands with identities
    /// `true` and `false` respectively, so they tolerate more than two
    /// operands; `NOT`, `IMP` and `IFF` require their exact operand counts.
    ///
    /// Fails with [`Error::UnboundLiteral`] if a leaf name is missing from
    /// the assignment, and with [`Error::Arity`] if an operand count
    /// disagrees with the operator. The function is pure: the formula is
    /// never mutated and repeated calls give the same result.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, Error> {
        match self {
            Formula::Literal(name) => assignment
                .value(name)
                .ok_or_else(|| Error::UnboundLiteral(name.clone())),
            Formula::Operator(op, children) => {
                let mut values = Vec::with_capacity(children.len());
                for child in children {
                    values.push(child.evaluate(assignment)?);
                }
                apply_op(*op, &values)
            }
        }
    }
}

/// **(internal)** Apply an operator to the already-evaluated operand values.
fn apply_op(op: Op, values: &[bool]) -> Result<bool, Error> {
    match op {
        Op::Not => match values {
            [value] => Ok(!value),
            _ => Err(Error::Arity {
                op,
                actual: values.len(),
            }),
        },
        Op::And => {
            if values.len() < 2 {
                return Err(Error::Arity {
                    op,
                    actual: values.len(),
                });
            }
            Ok(values.iter().fold(true, |acc, value| acc && *value))
        }
        Op::Or => {
            if values.len() < 2 {
                return Err(Error::Arity {
                    op,
                    actual: values.len(),
                });
            }
            Ok(values.iter().fold(false, |acc, value| acc || *value))
        }
        Op::Imp => match values {
            [antecedent, consequent] => Ok(!antecedent || *consequent),
            _ => Err(Error::Arity {
                op,
                actual: values.len(),
            }),
        },
        Op::Iff => match values {
            [left, right] => Ok(left == right),
            _ => Err(Error::Arity {
                op,
                actual: values.len(),
            }),
        },
    }
}
