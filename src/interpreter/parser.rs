/// Core parsing types and the expression entry point.
///
/// Contains the shared `ParseResult` alias and the top-level expression
/// parser that the rest of the precedence hierarchy hangs off.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels for the arithmetic operators: addition
/// and subtraction, multiplication and division, and right-associative
/// exponentiation.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix signs, numeric literals, grouping, and identifier
/// resolution, including the whitelist enforcement for names and function
/// calls.
pub mod unary;
