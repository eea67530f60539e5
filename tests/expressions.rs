use approx::assert_relative_eq;
use quadra::{error::{EvalError, EvaluationError, ParseError},
             evaluate};

fn values(expression: &str, points: &[f64]) -> Vec<f64> {
    evaluate(expression, points).unwrap_or_else(|e| panic!("'{expression}' failed: {e}"))
}

fn value(expression: &str, point: f64) -> f64 {
    values(expression, &[point])[0]
}

fn rejected(expression: &str) -> EvaluationError {
    match evaluate(expression, &[1.0]) {
        Ok(values) => panic!("'{expression}' evaluated to {values:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn evaluation_preserves_point_order_and_count() {
    let points = [0.0, 1.0, 2.0, 3.0, -1.5];
    let result = values("3*t**2 + 2*t", &points);

    assert_eq!(result.len(), points.len());
    assert_eq!(result, vec![0.0, 5.0, 16.0, 33.0, 3.75]);
}

#[test]
fn variable_is_spelled_t_or_x() {
    assert_eq!(value("t + 1", 4.0), 5.0);
    assert_eq!(value("x + 1", 4.0), 5.0);
    assert_eq!(values("t * x", &[3.0]), vec![9.0]);
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(value("2 + 3 * 4", 0.0), 14.0);
    assert_eq!(value("(2 + 3) * 4", 0.0), 20.0);
    assert_eq!(value("7 / 2", 0.0), 3.5);
    assert_eq!(value("10 - 4 - 3", 0.0), 3.0);
    assert_eq!(value("24 / 4 / 2", 0.0), 3.0);
}

#[test]
fn power_binds_tighter_than_a_leading_sign() {
    assert_eq!(value("-t**2", 3.0), -9.0);
    assert_eq!(value("(-t)**2", 3.0), 9.0);
}

#[test]
fn power_is_right_associative() {
    assert_eq!(value("2**3**2", 0.0), 512.0);
    assert_eq!(value("(2**3)**2", 0.0), 64.0);
}

#[test]
fn power_accepts_a_signed_exponent() {
    assert_eq!(value("2**-2", 0.0), 0.25);
    assert_eq!(value("2 ** +3", 0.0), 8.0);
}

#[test]
fn unary_signs_stack() {
    assert_eq!(value("--t", 5.0), 5.0);
    assert_eq!(value("-+-t", 5.0), 5.0);
    assert_eq!(value("+t", 5.0), 5.0);
}

#[test]
fn constants_pi_and_e() {
    assert_eq!(value("pi", 0.0), std::f64::consts::PI);
    assert_eq!(value("e", 0.0), std::f64::consts::E);
    assert_relative_eq!(value("2 * pi * t", 1.0), std::f64::consts::TAU);
}

#[test]
fn number_literal_forms() {
    assert_eq!(value("42", 0.0), 42.0);
    assert_eq!(value("3.25", 0.0), 3.25);
    assert_eq!(value(".5", 0.0), 0.5);
    assert_eq!(value("2.5e2", 0.0), 250.0);
    assert_eq!(value("1E-2", 0.0), 0.01);
}

#[test]
fn builtin_functions_match_std() {
    assert_relative_eq!(value("sin(pi / 2)", 0.0), 1.0);
    assert_relative_eq!(value("cos(0)", 0.0), 1.0);
    assert_relative_eq!(value("tan(pi / 4)", 0.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(value("sqrt(t)", 9.0), 3.0);
    assert_relative_eq!(value("exp(1)", 0.0), std::f64::consts::E);
    assert_relative_eq!(value("log(e)", 0.0), 1.0);
    assert_relative_eq!(value("atan(t)", 1.0), f64::atan(1.0));
    assert_eq!(value("floor(2.7)", 0.0), 2.0);
    assert_eq!(value("ceil(2.2)", 0.0), 3.0);
    assert_relative_eq!(value("degrees(pi)", 0.0), 180.0);
    assert_relative_eq!(value("radians(180)", 0.0), std::f64::consts::PI);
    assert_relative_eq!(value("sinh(t)", 1.0), 1.0f64.sinh());
    assert_relative_eq!(value("tanh(t)", 0.5), 0.5f64.tanh());
}

#[test]
fn function_aliases_are_equivalent() {
    assert_eq!(value("asin(0.5)", 0.0), value("arcsin(0.5)", 0.0));
    assert_eq!(value("acos(0.5)", 0.0), value("arccos(0.5)", 0.0));
    assert_eq!(value("atan(0.5)", 0.0), value("arctan(0.5)", 0.0));
    assert_eq!(value("log(t)", 7.0), value("ln(t)", 7.0));
    assert_eq!(value("abs(-3)", 0.0), value("absolute(-3)", 0.0));
}

#[test]
fn function_arguments_are_full_expressions() {
    assert_relative_eq!(value("sin(2 * t + 1)", 0.5), f64::sin(2.0));
    assert_relative_eq!(value("sqrt(abs(-t))", 16.0), 4.0);
}

#[test]
fn names_outside_the_whitelist_are_rejected() {
    assert!(matches!(rejected("foo + 1"),
                     EvaluationError::Parse(ParseError::UnknownIdentifier { .. })));
    assert!(matches!(rejected("import os"),
                     EvaluationError::Parse(ParseError::UnknownIdentifier { .. })));
    assert!(matches!(rejected("__import__(t)"),
                     EvaluationError::Parse(ParseError::UnknownIdentifier { .. })));
    assert!(matches!(rejected("eval(t)"),
                     EvaluationError::Parse(ParseError::UnknownIdentifier { .. })));
}

#[test]
fn rejection_reports_name_and_column() {
    match rejected("2 + foo") {
        EvaluationError::Parse(ParseError::UnknownIdentifier { name, column }) => {
            assert_eq!(name, "foo");
            assert_eq!(column, 5);
        },
        other => panic!("expected UnknownIdentifier, got {other:?}"),
    }
}

#[test]
fn bare_function_name_is_rejected() {
    match rejected("sin") {
        EvaluationError::Parse(ParseError::MissingFunctionArgument { function, column }) => {
            assert_eq!(function, "sin");
            assert_eq!(column, 1);
        },
        other => panic!("expected MissingFunctionArgument, got {other:?}"),
    }

    assert!(matches!(rejected("2 * sqrt + 1"),
                     EvaluationError::Parse(ParseError::MissingFunctionArgument { .. })));
}

#[test]
fn caret_is_not_an_operator() {
    assert!(matches!(rejected("t ^ 2"),
                     EvaluationError::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn syntax_errors_are_rejected() {
    assert!(matches!(rejected("3 +"),
                     EvaluationError::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(rejected(""),
                     EvaluationError::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(rejected("(2 * t"),
                     EvaluationError::Parse(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(rejected("sin(t"),
                     EvaluationError::Parse(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(rejected(")"),
                     EvaluationError::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(rejected("2 3"),
                     EvaluationError::Parse(ParseError::TrailingTokens { .. })));
    assert!(matches!(rejected("(1)(2)"),
                     EvaluationError::Parse(ParseError::TrailingTokens { .. })));
}

#[test]
fn division_by_zero_reports_the_sample_point() {
    match rejected("1 / (t - 1)") {
        EvaluationError::Eval(EvalError::DivisionByZero { at, .. }) => assert_eq!(at, 1.0),
        other => panic!("expected DivisionByZero, got {other:?}"),
    }

    assert!(matches!(rejected("1 / 0"),
                     EvaluationError::Eval(EvalError::DivisionByZero { .. })));
}

#[test]
fn non_real_powers_are_rejected() {
    assert!(matches!(rejected("(-8) ** 0.5"),
                     EvaluationError::Eval(EvalError::NonRealPower { .. })));
    assert!(matches!(rejected("(-t) ** 1.5"),
                     EvaluationError::Eval(EvalError::NonRealPower { .. })));
}

#[test]
fn function_domain_violations_are_rejected() {
    assert!(matches!(rejected("log(0)"),
                     EvaluationError::Eval(EvalError::FunctionDomain { .. })));
    assert!(matches!(rejected("log(-1)"),
                     EvaluationError::Eval(EvalError::FunctionDomain { .. })));
    assert!(matches!(rejected("sqrt(-4)"),
                     EvaluationError::Eval(EvalError::FunctionDomain { .. })));
    assert!(matches!(rejected("asin(2)"),
                     EvaluationError::Eval(EvalError::FunctionDomain { .. })));
    assert!(matches!(rejected("exp(1000)"),
                     EvaluationError::Eval(EvalError::FunctionDomain { .. })));
}

#[test]
fn non_finite_arithmetic_is_rejected() {
    assert!(matches!(rejected("1e308 * 10"),
                     EvaluationError::Eval(EvalError::NonFiniteResult { .. })));
    assert!(matches!(rejected("0 ** -1"),
                     EvaluationError::Eval(EvalError::NonFiniteResult { .. })));
}

#[test]
fn one_bad_point_fails_the_whole_call() {
    assert!(evaluate("1 / t", &[1.0, 2.0]).is_ok());
    assert!(evaluate("1 / t", &[1.0, 0.0, 2.0]).is_err());
}

#[test]
fn empty_points_still_parse_the_expression() {
    assert_eq!(evaluate("3*t**2 + 2*t", &[]).unwrap(), Vec::<f64>::new());
    assert!(matches!(evaluate("nope(t)", &[]),
                     Err(EvaluationError::Parse(ParseError::UnknownIdentifier { .. }))));
    assert!(matches!(evaluate("3 +", &[]),
                     Err(EvaluationError::Parse(ParseError::UnexpectedEndOfInput { .. }))));
}

#[test]
fn evaluation_is_deterministic() {
    let points = [0.0, 0.1, 1.0, 2.5, 9.9];
    let first = values("sin(t) * exp(-t) + t**2", &points);
    let second = values("sin(t) * exp(-t) + t**2", &points);

    assert_eq!(first, second);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(value("3*t**2+2*t", 2.0), value("3 * t ** 2 + 2 * t", 2.0));
    assert_eq!(value("\t sin( t )\n", 1.0), value("sin(t)", 1.0));
}

#[test]
fn errors_render_with_their_column() {
    let message = rejected("2 + foo").to_string();
    assert!(message.starts_with("Error at column 5:"), "got: {message}");

    let message = rejected("t ^ 2").to_string();
    assert!(message.starts_with("Error at column 3:"), "got: {message}");
}
