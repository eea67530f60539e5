use crate::{
    ast::{Expr, UnaryOperator},
    error::EvalError,
    interpreter::evaluator::binary::eval_binary,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression at a single sample point.
///
/// This is the main entry point for expression evaluation.
/// The evaluator dispatches based on expression variant: numeric literals,
/// the independent variable, unary and binary operations, and builtin
/// function calls.
///
/// There is no evaluation context or scope stack: the expression language
/// has exactly one variable, whose value arrives as the `t` parameter, and
/// function names were already resolved while parsing. Evaluation is a pure
/// function of its two inputs.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `t`: Value of the independent variable at this sample point.
///
/// # Returns
/// The computed value, which is finite whenever evaluation succeeds.
///
/// # Example
/// ```
/// use quadra::{ast::Expr, interpreter::evaluator::core::eval};
///
/// let expr = Expr::Variable { column: 1 };
///
/// assert_eq!(eval(&expr, 2.5).unwrap(), 2.5);
/// ```
pub fn eval(expr: &Expr, t: f64) -> EvalResult<f64> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),
        Expr::Variable { .. } => Ok(t),
        Expr::UnaryOp { op, expr, .. } => {
            let value = eval(expr, t)?;
            match op {
                UnaryOperator::Negate => Ok(-value),
            }
        },
        Expr::BinaryOp { left,
                         op,
                         right,
                         column, } => {
            let left = eval(left, t)?;
            let right = eval(right, t)?;
            eval_binary(*op, left, right, *column, t)
        },
        Expr::FunctionCall { function,
                             argument,
                             column, } => {
            let argument = eval(argument, t)?;
            function.apply(argument, *column)
        },
    }
}
