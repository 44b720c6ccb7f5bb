//! # dartish
//!
//! dartish is a tiny interpreter for a Dart-flavoured language of variable
//! declarations and print calls over integer arithmetic.
//!
//! ```text
//! var flour = 2;
//! var sugar = 1;
//! var total = flour + sugar;
//! print(total);
//! ```
//!
//! Source goes through three passes: the lexer turns text into tokens, the
//! parser builds statements, and the evaluator executes them against a fresh
//! environment. Operators have no precedence; `2 + 3 * 4` is `(2 + 3) * 4`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{Interpreter, output::PrintHandler};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator, and can be rendered back to source text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during tokenizing,
/// parsing or evaluating code, each carrying the location it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and token positions for context.
/// - Combines both kinds into the single [`error::Error`] returned by a run.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the environment, evaluation and
/// output handling to provide a complete runtime for source programs.
pub mod interpreter;

/// The program run when the host is given no source.
pub const SAMPLE_PROGRAM: &str = "
var flour = 2;
var sugar = 1;
var total = flour + sugar;
print(total);
";

/// Runs a program, printing its output to stdout.
///
/// Each call uses a fresh environment.
///
/// # Errors
/// Returns an error if tokenizing, parsing or evaluation fails. Lines printed
/// before a runtime error have already been written.
///
/// # Examples
/// ```
/// use dartish::run;
///
/// assert!(run("var x = 5; print(x);").is_ok());
///
/// // `y` was never declared.
/// assert!(run("print(y);").is_err());
/// ```
pub fn run(source: &str) -> Result<(), error::Error> {
    Interpreter::new(PrintHandler::Stdout).run(source)
}
