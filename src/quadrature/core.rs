use crate::error::QuadratureError;

/// Result type used by the quadrature engine.
///
/// All integration functions return either a value of type `T` or a
/// `QuadratureError` describing the failure.
pub type IntegrateResult<T> = Result<T, QuadratureError>;

/// The outcome of a single quadrature computation.
///
/// Both rules return this shape, so a caller never has to guess which
/// parameters were honored: `segments_used` always reports the count the
/// estimate was actually computed with. For the trapezoidal rule it equals
/// the request; Simpson's rule rounds an odd request up to the next even
/// count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureResult {
    /// The integral estimate.
    pub estimate:      f64,
    /// The number of segments the estimate was computed with.
    pub segments_used: usize,
}

/// Checks the integration parameters shared by both rules.
///
/// Runs before any grid is built, so the step size `(b - a) / n` can never
/// divide by zero and no sample point can be non-finite. Bounds are checked
/// for finiteness before the `a == b` comparison, so two equal infinite
/// bounds are reported as non-finite rather than degenerate.
///
/// `a > b` is allowed: the grid simply descends and both estimates flip
/// sign, consistent with a negative step.
///
/// # Parameters
/// - `a`: Start of the integration interval.
/// - `b`: End of the integration interval.
/// - `n`: Requested segment count.
///
/// # Errors
/// - `ZeroSegments` if `n == 0`.
/// - `NonFiniteBound` if `a` or `b` is NaN or infinite.
/// - `DegenerateInterval` if `a == b`.
pub(crate) fn check_parameters(a: f64, b: f64, n: usize) -> IntegrateResult<()> {
    if n == 0 {
        return Err(QuadratureError::ZeroSegments);
    }
    if !a.is_finite() {
        return Err(QuadratureError::NonFiniteBound { bound: "a", value: a });
    }
    if !b.is_finite() {
        return Err(QuadratureError::NonFiniteBound { bound: "b", value: b });
    }
    if a == b {
        return Err(QuadratureError::DegenerateInterval { at: a });
    }
    Ok(())
}
