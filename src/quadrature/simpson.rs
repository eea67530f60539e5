use crate::{
    evaluate,
    quadrature::{
        core::{IntegrateResult, QuadratureResult, check_parameters},
        grid::sample_grid,
    },
};

/// Integrates a velocity expression with the composite Simpson's 1/3 rule.
///
/// Simpson's rule fits a parabola over each pair of adjacent segments, which
/// requires an even segment count. An odd request is rounded up to the next
/// even count rather than rejected; the count actually used is reported in
/// the result, and the caller is responsible for surfacing the adjustment.
/// The rule is exact for integrands of degree at most three.
///
/// The weighting over the `segments_used + 1` evaluated values is: endpoints
/// once, odd-indexed points four times, even interior points twice, all
/// scaled by a third of the step. With the minimum count of 2 segments the
/// even-interior sum is empty and contributes nothing; that is a valid case,
/// not an error.
///
/// # Parameters
/// - `expression`: The velocity expression `v(t)`.
/// - `a`: Start of the integration interval.
/// - `b`: End of the integration interval. May be less than `a`, which flips
///   the sign of the estimate.
/// - `n`: Requested number of segments, at least 1. An odd count is used as
///   `n + 1`.
///
/// # Errors
/// Returns a `QuadratureError` if the parameters are invalid (`n == 0`,
/// `a == b`, a non-finite bound) or if the expression fails to parse or to
/// evaluate at any grid point. An expression failure carries no partial
/// result.
///
/// # Example
/// ```
/// use quadra::integrate_simpson;
///
/// // Simpson's rule is exact for cubics; the odd request is rounded up.
/// let result = integrate_simpson("3*t**2 + 2*t", 0.0, 10.0, 19).unwrap();
///
/// assert_eq!(result.segments_used, 20);
/// assert!((result.estimate - 1100.0).abs() < 1e-9);
/// ```
pub fn integrate_simpson(expression: &str,
                         a: f64,
                         b: f64,
                         n: usize)
                         -> IntegrateResult<QuadratureResult> {
    check_parameters(a, b, n)?;

    let segments_used = if n.is_multiple_of(2) { n } else { n + 1 };

    let grid = sample_grid(a, b, segments_used);
    let values = evaluate(expression, &grid)?;

    let h = (b - a) / segments_used as f64;
    let odd: f64 = values[1..segments_used].iter().step_by(2).sum();
    let even_interior: f64 = values[2..segments_used].iter().step_by(2).sum();
    let estimate =
        (h / 3.0) * (values[0] + 4.0 * odd + 2.0 * even_interior + values[segments_used]);

    Ok(QuadratureResult { estimate,
                          segments_used })
}
