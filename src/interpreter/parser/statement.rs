use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Tokenizer,
        parser::core::{Bindings, ParseResult, parse_expression},
    },
};

/// Parses every top-level expression until the input is exhausted.
///
/// Expressions follow each other without a separator: `t+1 inc(1)` is two
/// top-level expressions, `t+1` and `inc(1)`. The first error aborts the
/// whole parse; no partial list is returned.
///
/// # Errors
/// - [`ParseError::EmptyInput`] when there is nothing left to parse.
/// - Any error raised while parsing one of the expressions.
///
/// # Example
/// ```
/// use expsolver::interpreter::{
///     lexer::{DEFAULT_OPERATORS, Tokenizer},
///     parser::{core::Bindings, statement::parse_statements},
/// };
///
/// let mut tokens = Tokenizer::new("1+2 3*4", DEFAULT_OPERATORS);
/// let statements = parse_statements(&mut tokens, Bindings::NONE).unwrap();
/// assert_eq!(statements.len(), 2);
/// ```
pub fn parse_statements(tokens: &mut Tokenizer, bindings: Bindings) -> ParseResult<Vec<Expr>> {
    if !tokens.has_more() {
        return Err(ParseError::EmptyInput);
    }

    let mut statements = Vec::new();
    while tokens.has_more() {
        statements.push(parse_expression(tokens, bindings)?);
    }

    tracing::trace!(statements = statements.len(), "parsed top-level expressions");
    Ok(statements)
}
