use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Location, Token},
        parser::core::ParseResult,
    },
};

/// Parses an operand followed by any number of operator/operand pairs.
///
/// Every operator has the same precedence, so each new pair wraps everything
/// parsed so far as its left side: `2 + 3 * 4` becomes `(2 + 3) * 4`.
///
/// # Errors
/// Returns a `ParseError` if the chain does not start with an operand or an
/// operator is not followed by one.
pub(in crate::interpreter::parser) fn parse_binary_chain<'a, I>(tokens: &mut Peekable<I>,
                                                                line: usize)
                                                                -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let mut left = parse_operand(tokens, "number or identifier", line)?;

    while let Some((op, at)) =
        tokens.peek()
              .and_then(|(token, at)| BinaryOperator::from_token(token).map(|op| (op, *at)))
    {
        tokens.next();

        let expected = format!("number or identifier after operator '{op}'");
        let right = parse_operand(tokens, &expected, at.line)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: at.line };
    }

    Ok(left)
}

/// Parses a single number literal or variable reference.
fn parse_operand<'a, I>(tokens: &mut Peekable<I>, expected: &str, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    match tokens.next() {
        Some((Token::Number(text), at)) => Ok(Expr::Literal { value: parse_integer(text, *at)?,
                                                              line:  at.line, }),
        Some((Token::Identifier(name), at)) => Ok(Expr::Variable { name: name.clone(),
                                                                   line: at.line, }),
        Some((token, at)) => Err(ParseError::Expected { expected: expected.to_string(),
                                                        found:    token.to_string(),
                                                        at:       *at, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                       line }),
    }
}

/// Converts the digits of a number token into its value.
fn parse_integer(text: &str, at: Location) -> ParseResult<i64> {
    text.parse().map_err(|_| ParseError::LiteralTooLarge { text: text.to_string(),
                                                           at })
}
