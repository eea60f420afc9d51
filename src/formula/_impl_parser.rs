//! Parsing proceeds in two stages. The tokenizer splits the input into
//! space-delimited tokens (brackets always form their own one-character
//! tokens) without validating their content. The parser then consumes the
//! token sequence through a linear-time cursor, committing to the `NOT` form
//! after an opening bracket if the next token is `NOT`, and to the binary
//! form otherwise. The first error encountered anywhere aborts the whole
//! parse; partial trees are discarded.

use super::{Formula, Op};
use crate::Error;

/// Split raw text into atomic tokens.
///
/// A space ends the token currently being built, `(` and `)` are always
/// single-character tokens (and also end an in-progress token), and any other
/// character extends the current token. No validation happens here: arbitrary
/// runs of non-space, non-bracket characters become one token. This function
/// is total and deterministic; empty input yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        match c {
            ' ' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            '(' | ')' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(c.to_string());
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Tokenize the given text and parse it as a single top-level formula.
pub fn parse(text: &str) -> Result<Formula, Error> {
    parse_tokens(&tokenize(text))
}

/// Parse a token sequence into a `Formula`.
///
/// The whole sequence must form exactly one expression of the strict, fully
/// parenthesized grammar; a bare literal is accepted as a degenerate formula.
/// Unconsumed trailing tokens are an error.
pub fn parse_tokens(tokens: &[String]) -> Result<Formula, Error> {
    if tokens.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut stream = TokenStream::new(tokens);
    let formula = parse_exp(&mut stream)?;
    if stream.peek().is_some() {
        return Err(Error::TrailingInput);
    }
    Ok(formula)
}

/// **(internal)** A cursor over the token sequence. Guarantees that parsing
/// only ever moves forward and takes linear time.
struct TokenStream<'a> {
    tokens: &'a [String],
    index: usize,
}

impl<'a> TokenStream<'a> {
    fn new(tokens: &'a [String]) -> TokenStream<'a> {
        TokenStream { tokens, index: 0 }
    }

    /// Consume and return the next token, or fail if the stream is exhausted.
    fn read(&mut self) -> Result<&'a str, Error> {
        let token = self.tokens.get(self.index).ok_or(Error::UnexpectedEof)?;
        self.index += 1;
        Ok(token)
    }

    /// Look at the next token without consuming it.
    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.index).map(|t| t.as_str())
    }
}

/// **(internal)** True if the token can appear as a literal: anything that is
/// not an operator keyword or a bracket.
fn is_literal_token(token: &str) -> bool {
    Op::from_keyword(token).is_none() && token != "(" && token != ")"
}

/// **(internal)** Parse one expression: either a bracketed sub-formula or a
/// bare literal.
fn parse_exp(stream: &mut TokenStream) -> Result<Formula, Error> {
    if stream.peek() == Some("(") {
        parse_bracketed_exp(stream)
    } else {
        let token = stream.read()?;
        if is_literal_token(token) {
            Ok(Formula::Literal(token.to_string()))
        } else {
            Err(Error::Syntax(format!(
                "Expected a literal or a formula, got '{}'.",
                token
            )))
        }
    }
}

/// **(internal)** Parse a bracketed expression, consuming both the opening
/// and the closing bracket.
///
/// After the opening bracket, a `NOT` token commits to the unary form with
/// either a bracketed sub-formula or a single bare literal as its operand.
/// Anything else is parsed as `left operator right`, where the operator
/// position accepts any of the five keywords — including `NOT`, whose wrong
/// operand count is only reported later, during evaluation.
fn parse_bracketed_exp(stream: &mut TokenStream) -> Result<Formula, Error> {
    if stream.read()? != "(" {
        return Err(Error::Syntax("Expected an opening bracket.".to_string()));
    }
    if stream.peek() == Some(Op::Not.keyword()) {
        stream.read()?;
        let operand = match stream.peek() {
            Some("(") => parse_bracketed_exp(stream)?,
            Some(token) if is_literal_token(token) => {
                stream.read()?;
                Formula::Literal(token.to_string())
            }
            Some(token) => {
                return Err(Error::Syntax(format!(
                    "Expected a literal or a formula, got '{}'.",
                    token
                )));
            }
            None => return Err(Error::UnexpectedEof),
        };
        expect_closing_bracket(stream)?;
        Ok(Formula::Operator(Op::Not, vec![operand]))
    } else {
        let left = parse_exp(stream)?;
        let op_token = stream.read()?;
        let op = Op::from_keyword(op_token).ok_or_else(|| {
            Error::Syntax(format!("'{}' is not a valid operator.", op_token))
        })?;
        let right = parse_exp(stream)?;
        expect_closing_bracket(stream)?;
        Ok(Formula::Operator(op, vec![left, right]))
    }
}

/// **(internal)** Consume the closing bracket of a bracketed expression.
fn expect_closing_bracket(stream: &mut TokenStream) -> Result<(), Error> {
    if stream.read()? != ")" {
        return Err(Error::Syntax("Expected a closing bracket.".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_example() {
        let tokens = tokenize("(A AND (B OR (NOT C)))");
        let expected = vec![
            "(", "A", "AND", "(", "B", "OR", "(", "NOT", "C", ")", ")", ")",
        ];
        assert_eq!(expected, tokens);
    }

    #[test]
    fn tokenize_brackets_are_isolated() {
        for token in tokenize("((A)OR(B))AND(C)") {
            if token == "(" || token == ")" {
                assert_eq!(1, token.len());
            } else {
                assert!(!token.contains('('));
                assert!(!token.contains(')'));
            }
        }
        assert_eq!(vec!["(", "(", "A", ")", "OR", "x", ")"], tokenize("((A)OR x)"));
    }

    #[test]
    fn tokenize_is_idempotent_after_first_pass() {
        // Joining tokens with single spaces and re-tokenizing is a fixed point.
        let inputs = vec![
            "(A AND (B OR (NOT C)))",
            "  lots   of    space  ",
            "((((weird",
            "a)b(c",
        ];
        for input in inputs {
            let once = tokenize(input);
            let joined = once.join(" ");
            assert_eq!(once, tokenize(&joined));
        }
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("     ").is_empty());
    }

    #[test]
    fn parse_example() {
        let parsed = parse("(A AND (B OR (NOT C)))").unwrap();
        let expected = Formula::Operator(
            Op::And,
            vec![
                Formula::Literal("A".to_string()),
                Formula::Operator(
                    Op::Or,
                    vec![
                        Formula::Literal("B".to_string()),
                        Formula::Operator(
                            Op::Not,
                            vec![Formula::Literal("C".to_string())],
                        ),
                    ],
                ),
            ],
        );
        assert_eq!(expected, parsed);
    }

    #[test]
    fn parse_bare_literal() {
        // Unparenthesized single-literal input is a degenerate formula.
        assert_eq!(Formula::Literal("A".to_string()), parse("A").unwrap());
        assert_eq!(
            Formula::Literal("v_1+{14}".to_string()),
            parse("v_1+{14}").unwrap()
        );
    }

    #[test]
    fn parse_not_forms() {
        let not_literal = parse("(NOT A)").unwrap();
        assert_eq!(
            Formula::Operator(Op::Not, vec![Formula::Literal("A".to_string())]),
            not_literal
        );
        // NOT of a bracketed sub-formula.
        let not_formula = parse("(NOT (A OR B))").unwrap();
        match not_formula {
            Formula::Operator(Op::Not, children) => assert_eq!(1, children.len()),
            other => panic!("Unexpected formula {:?}.", other),
        }
    }

    #[test]
    fn parse_binary_not_is_accepted() {
        // The operator position accepts all five keywords; the arity problem
        // of a two-operand NOT only surfaces during evaluation.
        let parsed = parse("(A NOT B)").unwrap();
        assert_eq!(
            Formula::Operator(
                Op::Not,
                vec![
                    Formula::Literal("A".to_string()),
                    Formula::Literal("B".to_string()),
                ]
            ),
            parsed
        );
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(Err(Error::EmptyInput), parse(""));
        assert_eq!(Err(Error::EmptyInput), parse("   "));
    }

    #[test]
    fn parse_unexpected_eof() {
        assert_eq!(Err(Error::UnexpectedEof), parse("(A AND B"));
        assert_eq!(Err(Error::UnexpectedEof), parse("(A AND"));
        assert_eq!(Err(Error::UnexpectedEof), parse("(NOT"));
        assert_eq!(Err(Error::UnexpectedEof), parse("("));
    }

    #[test]
    fn parse_trailing_input() {
        assert_eq!(Err(Error::TrailingInput), parse("A B"));
        assert_eq!(Err(Error::TrailingInput), parse("(A AND B) C"));
        // A forgotten outer bracket pair is the classic trigger.
        assert_eq!(Err(Error::TrailingInput), parse("A AND B"));
    }

    #[test]
    fn parse_invalid_operator() {
        assert_eq!(
            Err(Error::Syntax("'XOR' is not a valid operator.".to_string())),
            parse("(A XOR B)")
        );
    }

    #[test]
    fn parse_operator_in_literal_position() {
        assert!(matches!(parse("(AND AND B)"), Err(Error::Syntax(_))));
        assert!(matches!(parse("(NOT AND)"), Err(Error::Syntax(_))));
        assert!(matches!(parse("()"), Err(Error::Syntax(_))));
        assert!(matches!(parse("IMP"), Err(Error::Syntax(_))));
    }

    #[test]
    fn parse_missing_closing_bracket() {
        assert_eq!(
            Err(Error::Syntax("Expected a closing bracket.".to_string())),
            parse("(A AND B C)")
        );
        assert_eq!(
            Err(Error::Syntax("Expected a closing bracket.".to_string())),
            parse("(NOT A B)")
        );
    }
}
