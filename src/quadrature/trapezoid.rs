use crate::{
    evaluate,
    quadrature::{
        core::{IntegrateResult, QuadratureResult, check_parameters},
        grid::sample_grid,
    },
};

/// Integrates a velocity expression with the composite trapezoidal rule.
///
/// The interval `[a, b]` is divided into `n` equal segments, the expression
/// is evaluated at the `n + 1` grid points, and the values are reduced with
/// the classic weighting: endpoints once, interior points twice, all scaled
/// by half the step. The rule is exact for integrands of degree at most one.
///
/// The trapezoidal rule works for any `n >= 1`, so `segments_used` in the
/// result always equals the request; it is reported anyway to keep the
/// contract uniform with [`crate::integrate_simpson`].
///
/// # Parameters
/// - `expression`: The velocity expression `v(t)`.
/// - `a`: Start of the integration interval.
/// - `b`: End of the integration interval. May be less than `a`, which flips
///   the sign of the estimate.
/// - `n`: Number of segments, at least 1.
///
/// # Errors
/// Returns a `QuadratureError` if the parameters are invalid (`n == 0`,
/// `a == b`, a non-finite bound) or if the expression fails to parse or to
/// evaluate at any grid point. An expression failure carries no partial
/// result.
///
/// # Example
/// ```
/// use quadra::integrate_trapezoid;
///
/// // v(t) = 2*t integrates to b^2 - a^2; the rule is exact for linear v.
/// let result = integrate_trapezoid("2*t", 0.0, 10.0, 4).unwrap();
///
/// assert_eq!(result.estimate, 100.0);
/// assert_eq!(result.segments_used, 4);
/// ```
pub fn integrate_trapezoid(expression: &str,
                           a: f64,
                           b: f64,
                           n: usize)
                           -> IntegrateResult<QuadratureResult> {
    check_parameters(a, b, n)?;

    let grid = sample_grid(a, b, n);
    let values = evaluate(expression, &grid)?;

    let h = (b - a) / n as f64;
    let interior: f64 = values[1..n].iter().sum();
    let estimate = (h / 2.0) * (values[0] + 2.0 * interior + values[n]);

    Ok(QuadratureResult { estimate,
                          segments_used: n })
}
