use approx::assert_relative_eq;
use quadra::{QuadratureResult,
             error::{EvalError, EvaluationError, ParseError, QuadratureError},
             evaluate, integrate_simpson, integrate_trapezoid};

fn trapezoid(expression: &str, a: f64, b: f64, n: usize) -> QuadratureResult {
    integrate_trapezoid(expression, a, b, n)
        .unwrap_or_else(|e| panic!("trapezoid of '{expression}' failed: {e}"))
}

fn simpson(expression: &str, a: f64, b: f64, n: usize) -> QuadratureResult {
    integrate_simpson(expression, a, b, n)
        .unwrap_or_else(|e| panic!("simpson of '{expression}' failed: {e}"))
}

#[test]
fn constant_velocity_is_exact_for_both_rules() {
    let by_trapezoid = trapezoid("5", 2.0, 7.0, 10);
    let by_simpson = simpson("5", 2.0, 7.0, 10);

    assert_relative_eq!(by_trapezoid.estimate, 25.0, epsilon = 1e-12);
    assert_relative_eq!(by_simpson.estimate, 25.0, epsilon = 1e-12);
    assert_eq!(by_trapezoid.segments_used, 10);
    assert_eq!(by_simpson.segments_used, 10);
}

#[test]
fn linear_velocity_is_exact_for_the_trapezoid_rule() {
    // The integral of 3t - 4 over [1, 5] is 20, and the trapezoid rule is
    // exact on straight lines for any segment count.
    assert_relative_eq!(trapezoid("3*t - 4", 1.0, 5.0, 7).estimate, 20.0, epsilon = 1e-12);
    assert_relative_eq!(trapezoid("2*t", 0.0, 10.0, 4).estimate, 100.0);
}

#[test]
fn cubic_velocity_is_exact_for_simpsons_rule() {
    // Simpson's rule integrates polynomials up to degree three exactly, even
    // on the coarsest possible grid.
    assert_relative_eq!(simpson("t**3 - 2*t", 1.0, 3.0, 2).estimate, 12.0, epsilon = 1e-9);
    assert_relative_eq!(simpson("3*t**2 + 2*t", 0.0, 10.0, 20).estimate,
                        1100.0,
                        epsilon = 1e-9);
}

#[test]
fn default_scenario_matches_hand_computation() {
    // v(t) = 3t^2 + 2t over [0, 10] with 20 segments: the trapezoid rule
    // overshoots the true distance of 1100 by h^2/4 * (b - a), which is
    // 1.25 here.
    assert_relative_eq!(trapezoid("3*t**2 + 2*t", 0.0, 10.0, 20).estimate,
                        1101.25,
                        epsilon = 1e-9);
}

#[test]
fn coarse_trapezoid_overestimates_a_convex_velocity() {
    // t^2 over [0, 3] with unit segments: (1/2)(0 + 2*1 + 2*4 + 9) = 9.5
    // against a true value of 9.
    let result = trapezoid("t**2", 0.0, 3.0, 3);

    assert_relative_eq!(result.estimate, 9.5, epsilon = 1e-12);
    assert!(result.estimate > 9.0);
}

#[test]
fn simpson_rounds_odd_segment_counts_up() {
    assert_eq!(simpson("t", 0.0, 1.0, 21).segments_used, 22);
    assert_eq!(simpson("t", 0.0, 1.0, 1).segments_used, 2);
    assert_eq!(simpson("t", 0.0, 1.0, 8).segments_used, 8);
    assert_eq!(trapezoid("t", 0.0, 1.0, 21).segments_used, 21);
}

#[test]
fn a_single_segment_is_enough() {
    assert_relative_eq!(trapezoid("t", 0.0, 2.0, 1).estimate, 2.0);

    // n = 1 is promoted to two segments, which is already exact for t^2.
    let result = simpson("t**2", 0.0, 2.0, 1);
    assert_eq!(result.segments_used, 2);
    assert_relative_eq!(result.estimate, 8.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn reversed_bounds_flip_the_sign() {
    let forward = trapezoid("2*t", 0.0, 10.0, 4);
    let reverse = trapezoid("2*t", 10.0, 0.0, 4);
    assert_relative_eq!(reverse.estimate, -forward.estimate);

    let forward = simpson("3*t**2", 0.0, 4.0, 8);
    let reverse = simpson("3*t**2", 4.0, 0.0, 8);
    assert_relative_eq!(reverse.estimate, -forward.estimate, epsilon = 1e-9);
}

#[test]
fn zero_segments_is_rejected() {
    assert!(matches!(integrate_trapezoid("t", 0.0, 1.0, 0),
                     Err(QuadratureError::ZeroSegments)));
    assert!(matches!(integrate_simpson("t", 0.0, 1.0, 0),
                     Err(QuadratureError::ZeroSegments)));
}

#[test]
fn degenerate_interval_is_rejected() {
    match integrate_trapezoid("t", 2.5, 2.5, 4) {
        Err(QuadratureError::DegenerateInterval { at }) => assert_eq!(at, 2.5),
        other => panic!("expected DegenerateInterval, got {other:?}"),
    }

    assert!(matches!(integrate_simpson("t", -1.0, -1.0, 4),
                     Err(QuadratureError::DegenerateInterval { .. })));
}

#[test]
fn non_finite_bounds_are_rejected() {
    match integrate_trapezoid("t", f64::NAN, 1.0, 4) {
        Err(QuadratureError::NonFiniteBound { bound, .. }) => assert_eq!(bound, "a"),
        other => panic!("expected NonFiniteBound, got {other:?}"),
    }

    match integrate_simpson("t", 0.0, f64::INFINITY, 4) {
        Err(QuadratureError::NonFiniteBound { bound, .. }) => assert_eq!(bound, "b"),
        other => panic!("expected NonFiniteBound, got {other:?}"),
    }

    // Two infinite bounds report the bound problem, not the degenerate
    // interval an `inf == inf` comparison would suggest.
    assert!(matches!(integrate_simpson("t", f64::INFINITY, f64::INFINITY, 4),
                     Err(QuadratureError::NonFiniteBound { bound: "a", .. })));
}

#[test]
fn expression_errors_pass_through() {
    assert!(matches!(
        integrate_trapezoid("nope(t)", 0.0, 1.0, 4),
        Err(QuadratureError::Expression(EvaluationError::Parse(ParseError::UnknownIdentifier { .. })))
    ));

    // The grid for [-1, 1] with two segments contains t = 0.
    assert!(matches!(
        integrate_simpson("1 / t", -1.0, 1.0, 2),
        Err(QuadratureError::Expression(EvaluationError::Eval(EvalError::DivisionByZero { .. })))
    ));
}

#[test]
fn propagated_errors_render_like_direct_ones() {
    let direct = evaluate("1 / t", &[0.0]).unwrap_err();
    let propagated = integrate_trapezoid("1 / t", -1.0, 1.0, 2).unwrap_err();

    assert_eq!(direct.to_string(), propagated.to_string());
}

#[test]
fn identical_runs_produce_identical_estimates() {
    let first = simpson("sin(t) * exp(-t / 3) + t**2", 0.5, 9.5, 36);
    let second = simpson("sin(t) * exp(-t / 3) + t**2", 0.5, 9.5, 36);

    assert_eq!(first.estimate.to_bits(), second.estimate.to_bits());
    assert_eq!(first.segments_used, second.segments_used);
}

#[test]
fn both_rules_converge_on_a_smooth_velocity() {
    // The integral of sin over [0, pi] is exactly 2.
    let pi = std::f64::consts::PI;

    assert_relative_eq!(simpson("sin(t)", 0.0, pi, 100).estimate, 2.0, epsilon = 1e-6);
    assert_relative_eq!(trapezoid("sin(t)", 0.0, pi, 1000).estimate, 2.0, epsilon = 1e-4);
}
