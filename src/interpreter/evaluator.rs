/// Binary operator evaluation logic.
///
/// Handles the execution of the arithmetic operators with explicit checks
/// for division by zero, non-real powers, and non-finite results.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the main evaluation function that walks an AST at a single
/// sample point, and the shared result alias.
pub mod core;

/// The builtin function whitelist.
///
/// Defines the fixed table of elementary functions an expression may call,
/// their name aliases, and the domain checking applied to their results.
pub mod function;
