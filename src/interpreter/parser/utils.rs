use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::core::ParseResult,
    },
};

/// Consumes the next token, requiring it to equal `wanted`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the required token.
/// - `wanted`: The token that must come next.
/// - `expected`: Description used in the error message, e.g. `"';'"`.
/// - `line`: Line of the enclosing statement, used if input ends early.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is a different one,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    wanted: &Token,
                                                    expected: &str,
                                                    line: usize)
                                                    -> ParseResult<()>
    where I: Iterator<Item = &'a Lexeme>
{
    match tokens.next() {
        Some((token, _)) if token == wanted => Ok(()),
        Some((token, at)) => Err(ParseError::Expected { expected: expected.to_string(),
                                                        found:    token.to_string(),
                                                        at:       *at, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                       line }),
    }
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              expected: &str,
                                                              line: usize)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Lexeme>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((token, at)) => Err(ParseError::Expected { expected: expected.to_string(),
                                                        found:    token.to_string(),
                                                        at:       *at, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                       line }),
    }
}
