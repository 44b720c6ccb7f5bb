use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Applies a binary operator to two integers.
///
/// All operators use checked arithmetic. Division truncates toward zero.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// - `DivisionByZero` if `op` is `/` and `right` is zero.
/// - `Overflow` if the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use dartish::{
///     ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Div, 7, 2, 1), Ok(3));
/// assert_eq!(eval_binary(BinaryOperator::Div, 7, 0, 4),
///            Err(RuntimeError::DivisionByZero { line: 4 }));
/// ```
pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            left.checked_div(right)
        },
    };

    result.ok_or(RuntimeError::Overflow { line })
}
