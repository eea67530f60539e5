/// The evaluator module executes AST nodes and computes values.
///
/// The evaluator traverses the AST and computes the value of the expression
/// at a given sample point, performing all arithmetic with explicit checks
/// so that only finite values are ever returned. It is the core execution
/// engine of the expression pipeline.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Applies builtin functions and checks their domains.
/// - Reports runtime errors such as division by zero or non-finite results.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer (tokenizer) reads the raw expression text and produces a stream
/// of tokens, each corresponding to meaningful language elements such as
/// numbers, identifiers, operators, and parentheses. This is the first stage
/// of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source columns.
/// - Handles numeric literals in integer, fractional, and scientific forms.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the expression. The
/// grammar it accepts is the whitelist: names and constructs outside it are
/// rejected here, before any evaluation.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes with source columns.
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Resolves identifiers to the variable, a constant, or a builtin function.
pub mod parser;
