/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include syntax mistakes, unexpected tokens, and
/// whitelist violations such as unknown names; all are detected before any
/// evaluation happens.
pub mod parse_error;

/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression at a sample point: division by zero, non-real powers, domain
/// errors from builtin functions, and non-finite arithmetic results.
pub mod eval_error;

/// The combined evaluation boundary error.
///
/// Wraps parse-stage and evaluation-stage errors into the single failure
/// type returned by [`crate::evaluate`].
pub mod evaluation_error;

/// Quadrature errors.
///
/// Defines the errors of the quadrature engine: invalid integration
/// parameters (zero segments, degenerate or non-finite intervals) and
/// expression failures propagated from the evaluator.
pub mod quadrature_error;

pub use eval_error::EvalError;
pub use evaluation_error::EvaluationError;
pub use parse_error::ParseError;
pub use quadrature_error::QuadratureError;
