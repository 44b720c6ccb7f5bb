use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Lexeme,
        parser::{binary::parse_binary_chain, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token sequence into the program's statements.
///
/// Statements are parsed one after another until the tokens run out. Each
/// statement consumes exactly the tokens it is made of, terminator included,
/// so the next statement starts right after it.
///
/// Grammar: `program := statement*`
///
/// # Example
/// ```
/// use dartish::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("var x = 5; print(x);").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(&program[0], Statement::VariableDeclaration { name, .. } if name == "x"));
/// assert!(matches!(&program[1], Statement::Print { .. }));
/// ```
pub fn parse_program(tokens: &[Lexeme]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while let Some(first) = iter.next() {
        statements.push(parse_statement(first, &mut iter)?);
    }

    debug!(count = statements.len(), "parsed program");
    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. Expressions have a single
/// level: an operand optionally followed by operator/operand pairs, folded
/// strictly left to right.
///
/// Grammar: `expression := operand (("+" | "-" | "*" | "/") operand)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first operand.
/// - `line`: Line of the enclosing statement, used if input ends early.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    parse_binary_chain(tokens, line)
}
