/// Entry points for parsing programs and expressions.
///
/// Contains the shared result type, the program loop and the expression entry
/// point used by statements.
pub mod core;

/// Binary expression parsing.
///
/// Builds operand chains into a left-leaning tree with no operator precedence.
pub mod binary;

/// Statement parsing.
///
/// Implements `var` declarations and `print` calls, including their
/// terminating punctuation.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides helpers for consuming required tokens and identifiers.
pub mod utils;
