/// Represents all errors that can occur while executing statements.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to read a variable that was never declared.
    #[error("Unknown variable '{name}' on line {line}.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Division by zero on line {line}.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Integer overflow while computing result on line {line}.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}
