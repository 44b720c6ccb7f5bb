use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::binary::eval_binary, output::PrintHandler},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression to its integer value.
///
/// Literals evaluate to themselves, variables are looked up in `env`, and
/// binary operations evaluate the left operand, then the right, then apply the
/// operator. Chains of any length are evaluated without deep recursion.
/// Evaluation never modifies the tree or the environment.
///
/// # Errors
/// - `UnknownVariable` if a referenced variable has no binding.
/// - Any error from [`eval_binary`].
///
/// # Example
/// ```
/// use dartish::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{environment::Environment, evaluator::core::eval_expression},
/// };
///
/// let mut env = Environment::new();
/// env.set("x", 40);
///
/// let expr = Expr::BinaryOp { left:  Box::new(Expr::Variable { name: "x".to_string(),
///                                                              line: 1, }),
///                             op:    BinaryOperator::Add,
///                             right: Box::new(Expr::Literal { value: 2, line: 1 }),
///                             line:  1, };
///
/// assert_eq!(eval_expression(&expr, &env), Ok(42));
/// ```
pub fn eval_expression(expr: &Expr, env: &Environment) -> EvalResult<i64> {
    // Chains lean left, so walk the left spine with a stack instead of
    // recursing once per operator.
    let mut spine = Vec::new();
    let mut node = expr;
    let mut value = loop {
        match node {
            Expr::Literal { value, .. } => break *value,
            Expr::Variable { name, line } => {
                break env.get(name)
                         .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                        line: *line, })?;
            },
            Expr::BinaryOp { left, op, right, line } => {
                spine.push((*op, right.as_ref(), *line));
                node = left.as_ref();
            },
        }
    };

    for (op, right, line) in spine.into_iter().rev() {
        let right = eval_expression(right, env)?;
        value = eval_binary(op, value, right, line)?;
    }
    Ok(value)
}

/// Executes a single statement.
///
/// A declaration evaluates its value and binds it, overwriting any earlier
/// binding of the same name. A print call evaluates its expression and emits
/// one `<expression>: <value>` line.
///
/// # Errors
/// Propagates any error from evaluating the statement's expression. Nothing is
/// bound or printed when evaluation fails.
pub fn exec_statement(statement: &Statement,
                      env: &mut Environment,
                      output: &mut PrintHandler)
                      -> EvalResult<()> {
    match statement {
        Statement::VariableDeclaration { name, value, .. } => {
            let value = eval_expression(value, env)?;
            trace!(%name, value, "bind variable");
            env.set(name, value);
        },
        Statement::Print { expr, .. } => {
            let value = eval_expression(expr, env)?;
            trace!(%expr, value, "print");
            output.println(&format!("{expr}: {value}"));
        },
    }
    Ok(())
}

/// Executes statements in order, stopping at the first failure.
///
/// Lines printed before a failing statement stay in `output`.
///
/// # Errors
/// Returns the first `RuntimeError` raised by any statement.
pub fn execute(statements: &[Statement],
               env: &mut Environment,
               output: &mut PrintHandler)
               -> EvalResult<()> {
    for statement in statements {
        exec_statement(statement, env, output)?;
    }
    Ok(())
}
