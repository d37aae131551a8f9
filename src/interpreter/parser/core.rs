use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Tokenizer, parser::binary::parse_comparison},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Which resolvers are available while parsing.
///
/// A variable reference or function call is only accepted when the matching
/// resolver has been registered; otherwise it is a parse error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bindings {
    /// A variable resolver is registered.
    pub variables: bool,
    /// A function resolver is registered.
    pub functions: bool,
}

impl Bindings {
    /// No resolvers at all.
    pub const NONE: Self = Self { variables: false,
                                  functions: false, };
    /// Both resolvers.
    pub const ALL: Self = Self { variables: true,
                                 functions: true, };
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It sits at the lowest
/// precedence level, the conditional, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := comparison ( "?" expression ":" expression )*`
///
/// Both branches are full expressions, so conditionals nest on either side.
///
/// # Parameters
/// - `tokens`: Tokenizer positioned at the start of an expression.
/// - `bindings`: The resolvers identifiers may bind to.
///
/// # Returns
/// The parsed expression node.
///
/// # Example
/// ```
/// use expsolver::{
///     ast::Expr,
///     interpreter::{
///         lexer::{DEFAULT_OPERATORS, Tokenizer},
///         parser::core::{Bindings, parse_expression},
///     },
/// };
///
/// let mut tokens = Tokenizer::new("4<1?9:7", DEFAULT_OPERATORS);
/// let tree = parse_expression(&mut tokens, Bindings::NONE).unwrap();
/// assert!(matches!(tree, Expr::Conditional { .. }));
/// assert!(!tokens.has_more());
/// ```
pub fn parse_expression(tokens: &mut Tokenizer, bindings: Bindings) -> ParseResult<Expr> {
    let mut condition = parse_comparison(tokens, bindings)?;

    while tokens.peek() == Some("?") {
        tokens.next();
        let then_branch = parse_branch(tokens, bindings)?;

        match tokens.peek() {
            Some(":") => {
                tokens.next();
            },
            _ => {
                return Err(ParseError::ExpectedColon { position: tokens.position() });
            },
        }

        let else_branch = parse_branch(tokens, bindings)?;
        condition = Expr::conditional(condition, then_branch, else_branch);
    }

    Ok(condition)
}

/// Parses one branch of a conditional.
///
/// A branch that is absent (end of input, or a `:` where the true branch
/// should be) is reported as [`ParseError::MissingBranch`].
fn parse_branch(tokens: &mut Tokenizer, bindings: Bindings) -> ParseResult<Expr> {
    match tokens.peek() {
        None | Some(":") => Err(ParseError::MissingBranch { position: tokens.position() }),
        Some(_) => parse_expression(tokens, bindings),
    }
}
