use std::fmt;

use logos::Logos;
use tracing::debug;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language; the literal text
/// of a token is available through its `Display` implementation.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `var`
    #[token("var")]
    Var,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x` or `total_sugar`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`. The digits are kept as written
    /// and converted by the parser.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,

    /// Line breaks. Never emitted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Any other whitespace, Unicode spaces included. Never emitted.
    #[regex(r"[^\S\n]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Var => "var",
            Self::Print => "print",
            Self::Identifier(text) | Self::Number(text) => text.as_str(),
            Self::Equals => "=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::NewLine => "\\n",
            Self::Ignored => " ",
        };
        write!(f, "{text}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Where a token sits in the program.
///
/// `position` is the index of the token in the token sequence, which is what
/// syntax errors report; `line` is the 1-based source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Index of the token in the token sequence.
    pub position: usize,
    /// Source line the token was found on.
    pub line:     usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position {} (line {})", self.position, self.line)
    }
}

/// A token together with its location.
pub type Lexeme = (Token, Location);

/// Converts source text into the ordered sequence of tokens it contains.
///
/// Whitespace and line breaks are dropped; every other character must start a
/// token.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedCharacter`] for the first character that
/// does not begin any token.
///
/// # Example
/// ```
/// use dartish::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("var x = 1;").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Var,
///                 Token::Identifier("x".to_string()),
///                 Token::Equals,
///                 Token::Number("1".to_string()),
///                 Token::Semicolon]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Lexeme>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        if let Ok(token) = token {
            let position = tokens.len();
            tokens.push((token, Location { position, line }));
        } else {
            return Err(ParseError::UnrecognizedCharacter { text: lexer.slice().to_string(),
                                                           line });
        }
    }

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
