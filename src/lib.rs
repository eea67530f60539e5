//! # quadra
//!
//! quadra estimates the distance traveled by an object from a
//! velocity-as-function-of-time expression. It parses and evaluates the
//! expression over sample grids inside a fixed whitelist of elementary
//! functions, and integrates it numerically with two independent quadrature
//! rules: the composite trapezoidal rule and composite Simpson's 1/3 rule.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::cast_precision_loss)]

use logos::Logos;

use crate::{
    error::{EvaluationError, ParseError},
    interpreter::{evaluator::core::eval, lexer::Token, parser::core::parse_expression},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of a velocity expression as a tree. The AST is built
/// by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for all constructs of the expression language.
/// - Attaches source columns to AST nodes for error reporting.
/// - Keeps the representable set identical to the whitelist: an `Expr` that
///   exists is already inside the sandbox.
pub mod ast;
/// Provides unified error types for parsing, evaluation, and quadrature.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression, and while integrating it. It standardizes
/// error reporting and carries detailed information about failures,
/// including error kinds, descriptions, and source columns for debugging and
/// user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   quadrature).
/// - Attaches source columns and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together lexing, parsing, and evaluation to provide the
/// complete machinery for computing a velocity expression's values at sample
/// points.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Enforces the whitelist grammar at parse time.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Numerical integration of velocity expressions.
///
/// This module implements the two quadrature rules over the expression
/// pipeline: the composite trapezoidal rule and the composite Simpson's 1/3
/// rule. Both validate their parameters, build an evenly spaced sample grid,
/// evaluate the expression over it, and reduce the value sequence to an
/// estimate.
///
/// # Responsibilities
/// - Validates integration parameters before any arithmetic can fail.
/// - Builds sample grids with exact endpoints.
/// - Computes both estimates and reports the segment count actually used.
pub mod quadrature;

pub use quadrature::{QuadratureResult, integrate_simpson, integrate_trapezoid};

/// Evaluates a velocity expression at each of the given sample points.
///
/// The expression is lexed and parsed once, so every point sees identical
/// semantics, and then evaluated per point. The output preserves order and
/// count: `values[i]` is the expression at `points[i]`. The variable may be
/// written `t` or `x`; both denote the sample point.
///
/// The failure contract is all-or-nothing: a syntax error, a name outside
/// the whitelist, or a numeric failure at any single point (division by
/// zero, a domain error, a non-finite result) fails the whole call, and no
/// partial value sequence is returned. An empty `points` slice still runs
/// the full parse, so such errors are reported even when there is nothing to
/// evaluate.
///
/// # Errors
/// Returns an error if the expression fails to lex or parse, references a
/// name outside the whitelist, or fails numerically at any sample point.
///
/// # Examples
/// ```
/// use quadra::evaluate;
///
/// // The expression is evaluated once per sample point, in order.
/// let values = evaluate("3*t**2 + 2*t", &[0.0, 1.0, 2.0]).unwrap();
/// assert_eq!(values, vec![0.0, 5.0, 16.0]);
///
/// // 'y' is neither the variable nor a builtin, so the call fails as a
/// // whole.
/// let result = evaluate("y + 1", &[0.0, 1.0]);
/// assert!(result.is_err());
/// ```
pub fn evaluate(expression: &str, points: &[f64]) -> Result<Vec<f64>, EvaluationError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start + 1));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token:  slice.to_string(),
                                                     column: lexer.span().start + 1, }.into());
        }
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    if let Some((token, column)) = iter.next() {
        return Err(ParseError::TrailingTokens { token:  token.to_string(),
                                                column: *column, }.into());
    }

    let mut values = Vec::with_capacity(points.len());
    for &point in points {
        values.push(eval(&expr, point)?);
    }

    Ok(values)
}
