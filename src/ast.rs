use crate::interpreter::evaluator::function::Function;

/// An abstract syntax tree (AST) node representing a velocity expression.
///
/// `Expr` covers every construct the expression language admits: numeric
/// literals, the single independent variable, unary and binary arithmetic,
/// and calls to whitelisted builtin functions. Each variant records the
/// 1-based source column it started at, for error reporting.
///
/// Anything outside these variants is rejected by the parser, so an `Expr`
/// that exists is already known to be inside the sandbox.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, or a folded constant (`pi`, `e`).
    Number {
        /// The literal value.
        value:  f64,
        /// Column in the source expression.
        column: usize,
    },
    /// The independent variable, written `t` or `x`.
    Variable {
        /// Column in the source expression.
        column: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Column in the source expression.
        column: usize,
    },
    /// A binary operation (addition, division, exponentiation, etc.).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Column in the source expression.
        column: usize,
    },
    /// A call to a whitelisted builtin function (e.g. `sin(t)`).
    ///
    /// The function is resolved while parsing, so evaluation cannot encounter
    /// an unknown name.
    FunctionCall {
        /// The resolved builtin function.
        function: Function,
        /// The argument expression.
        argument: Box<Self>,
        /// Column in the source expression.
        column:   usize,
    },
}

impl Expr {
    /// Gets the source column from `self`.
    /// ## Example
    /// ```
    /// use quadra::ast::Expr;
    ///
    /// let expr = Expr::Variable { column: 5 };
    ///
    /// assert_eq!(expr.column(), 5);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Number { column, .. }
            | Self::Variable { column, .. }
            | Self::UnaryOp { column, .. }
            | Self::BinaryOp { column, .. }
            | Self::FunctionCall { column, .. } => *column,
        }
    }
}

/// Represents a binary operator.
///
/// The operator set is fixed to plain arithmetic; there are no comparison,
/// logical, or bitwise operators in the expression language.
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
    /// Exponentiation (`**`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-t`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "**",
        };
        write!(f, "{operator}")
    }
}
