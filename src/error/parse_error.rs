#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building an expression tree.
///
/// Every variant records the tokenizer position (the index of the token the
/// parser was looking at) where the problem was detected.
pub enum ParseError {
    /// Found a token that cannot start or continue an expression.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// The token position where the error occurred.
        position: usize,
    },
    /// Reached the end of input while an operand was still required.
    UnexpectedEndOfInput {
        /// The token position where the error occurred.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The token position where the error occurred.
        position: usize,
    },
    /// A conditional was missing the `:` between its branches.
    ExpectedColon {
        /// The token position where the error occurred.
        position: usize,
    },
    /// A conditional was missing one of its branches.
    MissingBranch {
        /// The token position where the error occurred.
        position: usize,
    },
    /// A parenthesized group had nothing between `(` and `)`.
    EmptyGroup {
        /// The token position where the error occurred.
        position: usize,
    },
    /// A function call's argument list was never closed.
    UnterminatedCall {
        /// The name of the function.
        name:     String,
        /// The token position where the error occurred.
        position: usize,
    },
    /// A comma in an argument list was not followed by an argument.
    MissingArgument {
        /// The name of the function.
        name:     String,
        /// The token position where the error occurred.
        position: usize,
    },
    /// A function call had more arguments than the evaluator can pass on.
    TooManyArguments {
        /// The name of the function.
        name:     String,
        /// The largest supported argument count.
        max:      usize,
        /// The token position where the error occurred.
        position: usize,
    },
    /// A variable was referenced but no variable resolver is registered.
    NoVariableResolver {
        /// The name of the variable.
        name:     String,
        /// The token position where the error occurred.
        position: usize,
    },
    /// A function was called but no function resolver is registered.
    NoFunctionResolver {
        /// The name of the function.
        name:     String,
        /// The token position where the error occurred.
        position: usize,
    },
    /// The source text contained no tokens at all.
    EmptyInput,
}

impl ParseError {
    /// Returns the token position the error was detected at, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::ExpectedColon { position }
            | Self::MissingBranch { position }
            | Self::EmptyGroup { position }
            | Self::UnterminatedCall { position, .. }
            | Self::MissingArgument { position, .. }
            | Self::TooManyArguments { position, .. }
            | Self::NoVariableResolver { position, .. }
            | Self::NoFunctionResolver { position, .. } => Some(*position),
            Self::EmptyInput => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at token {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at token {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at token {position}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedColon { position } => write!(f,
                                                       "Error at token {position}: Expected ':' between conditional branches. Use <exp>?<true>:<false>"),

            Self::MissingBranch { position } => write!(f,
                                                       "Error at token {position}: Conditional branch missing. Use <exp>?<true>:<false>"),

            Self::EmptyGroup { position } => {
                write!(f, "Error at token {position}: Empty parenthesized expression.")
            },

            Self::UnterminatedCall { name, position } => {
                write!(f, "Error at token {position}: Unterminated function call: {name}.")
            },

            Self::MissingArgument { name, position } => write!(f,
                                                               "Error at token {position}: Missing argument after ',' in call to {name}."),

            Self::TooManyArguments { name, max, position } => write!(f,
                                                                     "Error at token {position}: Too many arguments to {name}. Maximum is {max}."),

            Self::NoVariableResolver { name, position } => write!(f,
                                                                  "Error at token {position}: No variable resolver registered for '{name}'."),

            Self::NoFunctionResolver { name, position } => write!(f,
                                                                  "Error at token {position}: No function resolver registered for '{name}'."),

            Self::EmptyInput => write!(f, "Error: Nothing to evaluate."),
        }
    }
}

impl std::error::Error for ParseError {}
