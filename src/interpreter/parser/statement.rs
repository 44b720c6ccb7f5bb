use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement is one of:
/// - a variable declaration: `var <identifier> = <expression> ;`
/// - a print call: `print ( <expression> ) ;`
///
/// The leading keyword decides which; any other token at the start of a
/// statement is an error.
///
/// # Parameters
/// - `first`: The statement's first token, already taken from the stream.
/// - `tokens`: Token iterator positioned just after `first`.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns a `ParseError` for an unexpected leading token or any malformed
/// part of the statement.
pub fn parse_statement<'a, I>(first: &'a Lexeme, tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Lexeme>
{
    match first {
        (Token::Var, at) => parse_variable_declaration(tokens, at.line),
        (Token::Print, at) => parse_print(tokens, at.line),
        (token, at) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                         at:    *at, }),
    }
}

/// Parses the rest of a variable declaration after `var`.
///
/// A declaration has the form `var <identifier> = <expression> ;`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is missing,
/// - `=` is missing,
/// - the expression is malformed,
/// - the expression is not followed by `;`.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Lexeme>
{
    let name = parse_identifier(tokens, "identifier after 'var'", line)?;
    expect(tokens, &Token::Equals, &format!("'=' after '{name}'"), line)?;

    let value = parse_expression(tokens, line)?;
    expect(tokens, &Token::Semicolon, "';' after variable declaration", line)?;

    Ok(Statement::VariableDeclaration { name, value, line })
}

/// Parses the rest of a print call after `print`.
///
/// A print call has the form `print ( <expression> ) ;`. The parentheses
/// belong to the call, not to the expression grammar.
///
/// # Errors
/// Returns a `ParseError` if:
/// - `(` is missing,
/// - the expression is malformed,
/// - `)` or `;` does not follow the expression.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Lexeme>
{
    expect(tokens, &Token::LParen, "'(' after 'print'", line)?;

    let expr = parse_expression(tokens, line)?;
    expect(tokens, &Token::RParen, "')' after print argument", line)?;
    expect(tokens, &Token::Semicolon, "';' after print statement", line)?;

    Ok(Statement::Print { expr, line })
}
