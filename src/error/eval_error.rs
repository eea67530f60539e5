use crate::ast::BinaryOperator;

#[derive(Debug)]
/// Represents all numeric errors that can occur while evaluating a parsed
/// expression at a sample point.
///
/// Evaluation works on finite `f64` values only; any operation that would
/// produce NaN or an infinity is reported as one of these variants instead of
/// letting the value propagate into a quadrature sum.
pub enum EvalError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The source column of the division operator.
        column: usize,
        /// The sample point being evaluated when the division failed.
        at:     f64,
    },
    /// Exponentiation produced a non-real result (negative base with a
    /// fractional exponent).
    NonRealPower {
        /// The base operand.
        base:     f64,
        /// The exponent operand.
        exponent: f64,
        /// The source column of the `**` operator.
        column:   usize,
    },
    /// A builtin function produced a non-finite value from a finite argument
    /// (outside its domain, or overflowing like `exp(1000)`).
    FunctionDomain {
        /// The name of the function.
        function: &'static str,
        /// The argument the function was applied to.
        argument: f64,
        /// The source column of the function call.
        column:   usize,
    },
    /// An arithmetic operation produced a non-finite value (overflow, or a
    /// form like `0 ** -1`).
    NonFiniteResult {
        /// The operator whose result was not finite.
        op:     BinaryOperator,
        /// The source column of the operator.
        column: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { column, at } => {
                write!(f, "Error at column {column}: Division by zero at t = {at}.")
            },

            Self::NonRealPower { base, exponent, column } => write!(f,
                                                                    "Error at column {column}: {base} ** {exponent} is not a real number."),

            Self::FunctionDomain { function, argument, column } => write!(f,
                                                                          "Error at column {column}: {function}({argument}) is not a finite real number."),

            Self::NonFiniteResult { op, column } => write!(f,
                                                           "Error at column {column}: The result of '{op}' is not finite."),
        }
    }
}

impl std::error::Error for EvalError {}
