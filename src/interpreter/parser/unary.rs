use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        evaluator::function::Function,
        lexer::Token,
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_expression},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (identity; consumed and discarded)
///
/// Unary operators are right-associative, so an input like `--t` is parsed as
/// `-(-t)`. A unary plus produces no AST node of its own; the operand is
/// returned unchanged.
///
/// If no unary operator is present, the function delegates to
/// [`parse_power`], which keeps `**` binding tighter than a sign on its left
/// (`-t ** 2` is `-(t ** 2)`).
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, column)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:     UnaryOperator::Negate,
                           expr:   Box::new(expr),
                           column: *column, })
    } else if let Some((Token::Plus, _)) = tokens.peek() {
        tokens.next();
        parse_unary(tokens)
    } else {
        parse_power(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - the independent variable (`t` or `x`)
/// - the constants `pi` and `e`, folded to numeric literals
/// - calls to whitelisted builtin functions, such as `sin(t)`
/// - parenthesized expressions
///
/// This function does not handle unary or binary operators.
/// It dispatches to specialized parsing functions depending on the leading
/// token.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
///              | VARIABLE
///              | CONSTANT
///              | FUNCTION "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { column: 0 })?;

    match peeked {
        (Token::Number(..), _) => parse_number(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Identifier(_), _) => parse_identifier_expr(tokens),
        (token, column) => Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                             column: *column, }),
    }
}

/// Parses a numeric literal.
///
/// The lexer has already converted the literal text to `f64`, so this only
/// wraps the value in an AST node.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a number.
///
/// # Returns
/// An [`Expr::Number`] containing the parsed value.
fn parse_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), column)) => Ok(Expr::Number { value:  *value,
                                                                  column: *column, }),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, column) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { column }),
    }
}

/// Parses an identifier into a variable, a folded constant, or a builtin
/// function call.
///
/// Supported forms:
///
/// - `t` or `x`: the independent variable (both names denote the same value)
/// - `pi` or `e`: mathematical constants, folded to numeric literals
/// - `sin(expression)`: a call to a whitelisted builtin function
///
/// This function is where the sandbox is enforced: any name that is not the
/// variable, a constant, or a builtin function is rejected here, at parse
/// time, so no unresolved name can survive into an AST. A builtin name that
/// is not applied to a parenthesized argument is rejected as well.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// - [`Expr::Variable`] for `t` or `x`,
/// - [`Expr::Number`] for `pi` or `e`,
/// - [`Expr::FunctionCall`] for a builtin name applied to an argument.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is outside the whitelist (`UnknownIdentifier`),
/// - a builtin name is not followed by `(` (`MissingFunctionArgument`),
/// - the argument's closing `)` is missing.
fn parse_identifier_expr<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, column) = match tokens.next() {
        Some((Token::Identifier(name), column)) => (name, *column),
        _ => unreachable!(),
    };

    match name.as_str() {
        "t" | "x" => Ok(Expr::Variable { column }),
        "pi" => Ok(Expr::Number { value: std::f64::consts::PI,
                                  column }),
        "e" => Ok(Expr::Number { value: std::f64::consts::E,
                                 column }),
        _ => match Function::from_name(name) {
            Some(function) => parse_function_call(tokens, function, column),
            None => Err(ParseError::UnknownIdentifier { name: name.clone(),
                                                        column }),
        },
    }
}

/// Parses the parenthesized argument of a resolved builtin function.
///
/// The function name itself has already been consumed; `tokens` must be
/// positioned at the opening `(` of the argument. Every builtin takes exactly
/// one argument, so the grammar here is fixed.
///
/// Grammar: `call := FUNCTION "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the function name.
/// - `function`: The builtin resolved from the name.
/// - `column`: Column of the function name, attached to the call node.
///
/// # Returns
/// An [`Expr::FunctionCall`] node.
///
/// # Errors
/// - `MissingFunctionArgument` if the name is not followed by `(`.
/// - `ExpectedClosingParen` if the argument is not closed.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>,
                              function: Function,
                              column: usize)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LParen, _)) => {},
        _ => {
            return Err(ParseError::MissingFunctionArgument { function: function.name().to_string(),
                                                             column });
        },
    }

    let (_, paren_column) = *tokens.next().unwrap();
    let argument = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(Expr::FunctionCall { function,
                                                            argument: Box::new(argument),
                                                            column }),
        _ => Err(ParseError::ExpectedClosingParen { column: paren_column }),
    }
}
