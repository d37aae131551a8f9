#[derive(Debug, Clone, PartialEq)]
/// Represents the errors strict evaluation can raise.
///
/// Lenient evaluation never produces these; it uses whatever value the
/// resolver returned.
pub enum RuntimeError {
    /// The variable resolver could not resolve a name.
    UnresolvedVariable {
        /// The name of the variable.
        name:  String,
        /// The value the resolver returned anyway.
        value: f64,
    },
    /// The function resolver reported a failed call.
    FunctionFailed {
        /// The name of the function.
        name:      String,
        /// The already evaluated arguments.
        arguments: Vec<f64>,
    },
    /// A hand-built call carried more arguments than can be passed on.
    TooManyArguments {
        /// The name of the function.
        name:  String,
        /// The number of arguments found.
        count: usize,
    },
    /// A variable or call was reached with no resolver to answer it.
    MissingResolver {
        /// The name of the variable or function.
        name: String,
    },
    /// Evaluation was requested before a successful preparation.
    NotPrepared,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvedVariable { name, value } => {
                write!(f, "Error: Unresolved variable '{name}' (resolver returned {value}).")
            },
            Self::FunctionFailed { name, arguments } => write!(f,
                                                               "Error: Function '{name}' failed for {} argument(s): {arguments:?}.",
                                                               arguments.len()),
            Self::TooManyArguments { name, count } => write!(f,
                                                             "Error: Call to '{name}' has {count} arguments, more than {} are not supported.",
                                                             crate::ast::MAX_ARGUMENTS),
            Self::MissingResolver { name } => {
                write!(f, "Error: No resolver available for '{name}'.")
            },
            Self::NotPrepared => write!(f, "Error: Expression has not been prepared."),
        }
    }
}

impl std::error::Error for RuntimeError {}
