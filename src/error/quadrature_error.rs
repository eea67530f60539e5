use crate::error::EvaluationError;

#[derive(Debug)]
/// Represents all errors that can occur in the quadrature engine.
///
/// The parameter variants are checked before any grid is built, so the step
/// size `h = (b - a) / n` can never divide by zero and the sample grid can
/// never contain a non-finite point.
pub enum QuadratureError {
    /// The requested segment count was zero.
    ZeroSegments,
    /// The integration interval collapsed to a single point (`a == b`).
    DegenerateInterval {
        /// The shared bound value.
        at: f64,
    },
    /// An interval bound was NaN or infinite.
    NonFiniteBound {
        /// Which bound, `"a"` or `"b"`.
        bound: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The expression failed to parse or to evaluate over the sample grid.
    Expression(EvaluationError),
}

impl std::fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroSegments => {
                write!(f, "At least one segment is required (n >= 1).")
            },

            Self::DegenerateInterval { at } => write!(f,
                                                      "The integration interval is a single point (a == b == {at})."),

            Self::NonFiniteBound { bound, value } => {
                write!(f, "Interval bound {bound} = {value} is not finite.")
            },

            Self::Expression(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for QuadratureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Expression(error) => Some(error),
            _ => None,
        }
    }
}

impl From<EvaluationError> for QuadratureError {
    fn from(error: EvaluationError) -> Self {
        Self::Expression(error)
    }
}
