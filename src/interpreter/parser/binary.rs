use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr},
    interpreter::{
        lexer::Tokenizer,
        parser::{
            core::{Bindings, ParseResult},
            primary::parse_primary,
        },
    },
};

/// Parses comparison expressions.
///
/// Handles left-associative `>` and `<`. Each comparison yields `1.0` or
/// `0.0` when evaluated.
///
/// Grammar: `comparison := shift (("<" | ">") shift)*`
///
/// # Parameters
/// - `tokens`: Tokenizer positioned at the left operand.
/// - `bindings`: The resolvers identifiers may bind to.
///
/// # Returns
/// A possibly nested `Expr::Comparison` tree.
pub fn parse_comparison(tokens: &mut Tokenizer, bindings: Bindings) -> ParseResult<Expr> {
    let mut left = parse_shift(tokens, bindings)?;
    loop {
        if let Some(op) = tokens.peek().and_then(ComparisonOperator::from_symbol)
           && matches!(op, ComparisonOperator::Greater | ComparisonOperator::Less)
        {
            tokens.next();
            let right = parse_shift(tokens, bindings)?;
            left = Expr::comparison(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses bit shift expressions.
///
/// Handles left-associative `<<` and `>>`, binding looser than addition:
/// `1<<2+1` is `1<<3`.
///
/// Grammar: `shift := additive (("<<" | ">>") additive)*`
pub fn parse_shift(tokens: &mut Tokenizer, bindings: Bindings) -> ParseResult<Expr> {
    let mut left = parse_additive(tokens, bindings)?;
    while let Some(op) = tokens.peek()
                               .and_then(BinaryOperator::from_symbol)
                               .filter(|op| op.is_shift())
    {
        tokens.next();
        let right = parse_additive(tokens, bindings)?;
        left = Expr::binary(op, left, right);
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Tokenizer positioned at the left operand.
/// - `bindings`: The resolvers identifiers may bind to.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive(tokens: &mut Tokenizer, bindings: Bindings) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(tokens, bindings)?;
    loop {
        if let Some(op) = tokens.peek().and_then(BinaryOperator::from_symbol)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, bindings)?;
            left = Expr::binary(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
pub fn parse_multiplicative(tokens: &mut Tokenizer, bindings: Bindings) -> ParseResult<Expr> {
    let mut left = parse_primary(tokens, bindings)?;
    loop {
        if let Some(op) = tokens.peek().and_then(BinaryOperator::from_symbol)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_primary(tokens, bindings)?;
            left = Expr::binary(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}
