use crate::error::{EvalError, ParseError};

#[derive(Debug)]
/// The single failure type of the expression-evaluation boundary.
///
/// Callers that hand an expression and sample points to [`crate::evaluate`]
/// receive either a complete value sequence or one of these; there is no
/// partial success. The variants only record which stage failed, so the two
/// stage errors stay usable on their own.
pub enum EvaluationError {
    /// The expression failed to lex or parse, or referenced something outside
    /// the whitelist.
    Parse(ParseError),
    /// The expression failed numerically at one of the sample points.
    Eval(EvalError),
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Eval(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Eval(error) => Some(error),
        }
    }
}

impl From<ParseError> for EvaluationError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for EvaluationError {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}
