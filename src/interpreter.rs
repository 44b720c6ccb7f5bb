use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        environment::Environment, evaluator::core::execute, lexer::tokenize,
        output::PrintHandler, parser::core::parse_program,
    },
};

/// Variable bindings for a program run.
///
/// Holds the flat name-to-integer store that declarations write to and
/// variable references read from.
pub mod environment;
/// The evaluator module executes AST nodes.
///
/// Walks statements in order, reduces expressions to integers, binds
/// variables and emits printed lines.
///
/// # Responsibilities
/// - Evaluates literals, variable references and binary operations.
/// - Executes declarations and print calls.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens: keywords, identifiers, number literals, operators and
/// punctuation. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with position and line.
/// - Drops whitespace.
/// - Reports characters that start no token.
pub mod lexer;
/// Destinations for printed output.
pub mod output;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs the statements of the program.
///
/// # Responsibilities
/// - Converts tokens into statements and left-folded expressions.
/// - Validates the grammar, reporting errors with token positions.
pub mod parser;

/// Runs programs through the whole pipeline: tokenize, parse, execute.
///
/// Every call to [`Interpreter::run`] starts from an empty [`Environment`],
/// so running the same source twice behaves identically. Printed lines
/// accumulate in the interpreter's [`PrintHandler`] across runs.
#[derive(Debug, Default)]
pub struct Interpreter {
    output: PrintHandler,
}

impl Interpreter {
    /// Creates an interpreter that prints through `output`.
    #[must_use]
    pub const fn new(output: PrintHandler) -> Self {
        Self { output }
    }

    /// Creates an interpreter that captures printed lines.
    #[must_use]
    pub const fn buffered() -> Self {
        Self::new(PrintHandler::buffer())
    }

    /// Tokenizes, parses and executes `source`.
    ///
    /// Nothing runs if the source fails to tokenize or parse. A runtime error
    /// stops execution at the failing statement; lines printed by earlier
    /// statements remain in the output.
    ///
    /// # Errors
    /// Returns the first [`Error`] raised by any stage.
    ///
    /// # Example
    /// ```
    /// use dartish::interpreter::Interpreter;
    ///
    /// let mut interpreter = Interpreter::buffered();
    /// interpreter.run("var a = 2; var b = 1; var c = a + b; print(c);").unwrap();
    ///
    /// assert_eq!(interpreter.output(), "c: 3\n");
    /// ```
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, source: &str) -> Result<(), Error> {
        let tokens = tokenize(source)?;
        let statements = parse_program(&tokens)?;

        let mut env = Environment::new();
        execute(&statements, &mut env, &mut self.output)?;

        debug!(variables = env.len(), "program finished");
        Ok(())
    }

    /// Everything printed so far, when the handler captures output.
    #[must_use]
    pub fn output(&self) -> &str {
        self.output.output()
    }

    /// Discards captured output.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }
}
