/// Binary operator evaluation logic.
///
/// Applies `+`, `-`, `*` and `/` to integer operands with overflow and
/// division-by-zero checks.
pub mod binary;

/// Core evaluation logic.
///
/// Contains expression evaluation, statement execution and the program loop.
pub mod core;
