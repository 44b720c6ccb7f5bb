use std::{fmt, mem};

use crate::interpreter::lexer::Token;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions form a closed set: integer literals, variable references and
/// binary operations whose operands are themselves expressions. The parser
/// only ever builds left-leaning chains (`((a + b) * c)`), but the type allows
/// any nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer constant.
    Literal {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

/// Tears the tree down with an explicit stack.
///
/// Operator chains can be arbitrarily long, so dropping them recursively could
/// exhaust the call stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Self::BinaryOp { left, right, .. } = self {
            pending.push(mem::replace(&mut **left, Self::Literal { value: 0, line: 0 }));
            pending.push(mem::replace(&mut **right, Self::Literal { value: 0, line: 0 }));
        }
        while let Some(mut expr) = pending.pop() {
            if let Self::BinaryOp { left, right, .. } = &mut expr {
                pending.push(mem::replace(&mut **left, Self::Literal { value: 0, line: 0 }));
                pending.push(mem::replace(&mut **right, Self::Literal { value: 0, line: 0 }));
            }
        }
    }
}

/// Renders the expression back to source form.
///
/// Chains print flat since they already read left to right. A binary node in
/// right-operand position is parenthesized so the text still describes the
/// same tree.
///
/// ```
/// use dartish::ast::{BinaryOperator, Expr};
///
/// let two = Box::new(Expr::Literal { value: 2, line: 1 });
/// let x = Box::new(Expr::Variable { name: "x".to_string(),
///                                   line: 1, });
/// let sum = Expr::BinaryOp { left:  two,
///                            op:    BinaryOperator::Add,
///                            right: x,
///                            line:  1, };
///
/// assert_eq!(sum.to_string(), "2 + x");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut spine = Vec::new();
        let mut node = self;
        loop {
            match node {
                Self::Literal { value, .. } => break write!(f, "{value}")?,
                Self::Variable { name, .. } => break write!(f, "{name}")?,
                Self::BinaryOp { left, op, right, .. } => {
                    spine.push((*op, right.as_ref()));
                    node = left.as_ref();
                },
            }
        }

        for (op, right) in spine.into_iter().rev() {
            if matches!(right, Self::BinaryOp { .. }) {
                write!(f, " {op} ({right})")?;
            } else {
                write!(f, " {op} {right}")?;
            }
        }
        Ok(())
    }
}

/// Represents a top-level statement.
///
/// A program is an ordered sequence of statements, executed in the order they
/// were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A variable declaration using `var`.
    VariableDeclaration {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `print(...)` call.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Maps an operator token to its operator, or `None` for any other token.
    #[must_use]
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
