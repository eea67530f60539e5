#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the 1-based column in the source expression where
/// the problem was detected. Sandbox violations (names outside the whitelist,
/// functions used without an argument) are parse errors: the grammar itself
/// is the whitelist, so nothing disallowed survives into an AST.
pub enum ParseError {
    /// Found an unexpected token while lexing or parsing.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source column where the error occurred.
        column: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source column where the error occurred.
        column: usize,
    },
    /// Referenced a name that is neither the variable, a constant, nor a
    /// builtin function.
    UnknownIdentifier {
        /// The name encountered.
        name:   String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A builtin function name was used without a parenthesized argument.
    MissingFunctionArgument {
        /// The name of the function.
        function: String,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Found extra tokens after parsing should have completed.
    TrailingTokens {
        /// The extra/unexpected token.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { column } => {
                write!(f, "Error at column {column}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { column } => write!(f,
                                                            "Error at column {column}: Expected closing parenthesis ')' but none found."),

            Self::UnknownIdentifier { name, column } => write!(f,
                                                               "Error at column {column}: Unknown name '{name}'. The variable is 't' (alias 'x'); everything else must be a builtin function or 'pi'/'e'."),

            Self::MissingFunctionArgument { function, column } => write!(f,
                                                                         "Error at column {column}: Function '{function}' needs an argument. Example: {function}(t)"),

            Self::TrailingTokens { token, column } => write!(f,
                                                             "Error at column {column}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
