/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing and parsing of
/// source code: unrecognized characters, missing or unexpected tokens, and
/// literals that do not fit the value type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing statements,
/// such as division by zero, arithmetic overflow or reading a variable that was
/// never declared.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that aborts a program run.
///
/// The host reports every variant the same way, as a single `Error: <message>`
/// line, so both kinds are displayed transparently.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A statement failed while executing.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
