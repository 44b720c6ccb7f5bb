use crate::interpreter::lexer::Location;

/// Represents all errors that can occur during tokenizing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The tokenizer found a character that starts no token.
    #[error("Unrecognized character '{text}' on line {line}.")]
    UnrecognizedCharacter {
        /// The offending source text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement began with a token other than `var` or `print`.
    #[error("Unexpected token '{token}' at {at}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// Where the token was found.
        at:    Location,
    },
    /// A specific construct was required but a different token was found.
    #[error("Expected {expected}, found '{found}' at {at}.")]
    Expected {
        /// Description of the construct that was required.
        expected: String,
        /// The token that was found instead.
        found:    String,
        /// Where the token was found.
        at:       Location,
    },
    /// The token sequence ended in the middle of a statement.
    #[error("Expected {expected} on line {line}, but reached the end of input.")]
    UnexpectedEndOfInput {
        /// Description of the construct that was required.
        expected: String,
        /// The line of the statement being parsed.
        line:     usize,
    },
    /// A number literal does not fit in a 64-bit signed integer.
    #[error("Literal {text} at {at} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        text: String,
        /// Where the literal was found.
        at:   Location,
    },
}
