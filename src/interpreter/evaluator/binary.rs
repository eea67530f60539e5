use crate::{ast::BinaryOperator, error::EvalError, interpreter::evaluator::core::EvalResult};

/// Applies a binary arithmetic operator to two finite operands.
///
/// Division checks its divisor explicitly, and exponentiation rejects a
/// negative base raised to a fractional exponent (which has no real value).
/// Every other non-finite outcome, such as overflow to infinity or `0 ** -1`,
/// is caught by a final finiteness check, so a returned value is always a
/// finite real number.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand; finite, produced by a previous checked step.
/// - `right`: Right operand; finite, produced by a previous checked step.
/// - `column`: Source column of the operator, for error reporting.
/// - `at`: The sample point under evaluation, for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed value.
///
/// # Example
/// ```
/// use quadra::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// let result = eval_binary(BinaryOperator::Pow, 2.0, 10.0, 1, 0.0).unwrap();
/// assert_eq!(result, 1024.0);
///
/// assert!(eval_binary(BinaryOperator::Div, 1.0, 0.0, 1, 0.0).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: f64,
                   right: f64,
                   column: usize,
                   at: f64)
                   -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    let result = match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero { column, at });
            }
            left / right
        },
        Pow => {
            let result = left.powf(right);
            if result.is_nan() {
                return Err(EvalError::NonRealPower { base: left,
                                                     exponent: right,
                                                     column });
            }
            result
        },
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvalError::NonFiniteResult { op, column })
    }
}
