use crate::{
    ast::{Expr, MAX_ARGUMENTS},
    error::ParseError,
    interpreter::{
        lexer::Tokenizer,
        literal::{decode, is_numeric_start},
        parser::core::{Bindings, ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar. The leading token alone
/// decides the rule:
/// - `(` starts a parenthesized group,
/// - a token starting with one of `-0123456789%$x` is a numeric literal,
/// - any other operator symbol is an error,
/// - anything else is a variable or, when followed by `(`, a function call.
///
/// Grammar:
/// ```text
///     primary := "(" expression ")"
///              | numeric_literal
///              | identifier_or_call
/// ```
/// # Parameters
/// - `tokens`: Tokenizer positioned at the start of a primary expression.
/// - `bindings`: The resolvers identifiers may bind to.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub fn parse_primary(tokens: &mut Tokenizer, bindings: Bindings) -> ParseResult<Expr> {
    let position = tokens.position();
    let Some(token) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { position });
    };

    if token == "(" {
        parse_grouping(tokens, bindings)
    } else if token.starts_with(is_numeric_start) {
        parse_literal(tokens)
    } else if tokens.operators().iter().any(|operator| operator == token) {
        Err(ParseError::UnexpectedToken { token: token.to_owned(),
                                          position })
    } else {
        parse_identifier_or_call(tokens, bindings)
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// An immediately closing `)` is reported as [`ParseError::EmptyGroup`];
/// empty argument lists are handled by the call rule before it gets here.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping(tokens: &mut Tokenizer, bindings: Bindings) -> ParseResult<Expr> {
    let position = tokens.position();
    tokens.next();
    if tokens.peek() == Some(")") {
        return Err(ParseError::EmptyGroup { position });
    }

    let expr = parse_expression(tokens, bindings)?;
    match tokens.peek() {
        Some(")") => {
            tokens.next();
            Ok(expr)
        },
        _ => Err(ParseError::ExpectedClosingParen { position: tokens.position() }),
    }
}

/// Parses a numeric literal into an [`Expr::Constant`].
///
/// A lone `-` is discarded and the token after it is decoded as a negated
/// literal, whatever that token is. `--4` therefore does not mean `4`.
fn parse_literal(tokens: &mut Tokenizer) -> ParseResult<Expr> {
    let position = tokens.position();
    let Some(token) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { position });
    };

    if token != "-" {
        return Ok(Expr::Constant(decode(token, false)));
    }

    match tokens.next() {
        Some(token) => Ok(Expr::Constant(decode(token, true))),
        None => Err(ParseError::UnexpectedEndOfInput { position: tokens.position() }),
    }
}

/// Parses a variable reference or a function call.
///
/// The identifier is consumed and the following token inspected: `(` makes it
/// a call, anything else a variable. Each form requires its resolver to be
/// registered.
///
/// Grammar:
/// ```text
///     identifier_or_call := IDENT "(" [ expression ( "," expression )* ] ")"
///                         | IDENT
/// ```
fn parse_identifier_or_call(tokens: &mut Tokenizer, bindings: Bindings) -> ParseResult<Expr> {
    let position = tokens.position();
    let Some(name) = tokens.next().map(str::to_owned) else {
        return Err(ParseError::UnexpectedEndOfInput { position });
    };

    if tokens.peek() == Some("(") {
        tokens.next();
        let arguments = parse_arguments(tokens, bindings, &name)?;
        if !bindings.functions {
            return Err(ParseError::NoFunctionResolver { name, position });
        }
        return Ok(Expr::call(name, arguments));
    }

    if !bindings.variables {
        return Err(ParseError::NoVariableResolver { name, position });
    }
    Ok(Expr::variable(name))
}

/// Parses a comma separated argument list after the opening `(`, including
/// the closing `)`.
///
/// `()` yields zero arguments. At most [`MAX_ARGUMENTS`] are accepted.
fn parse_arguments(tokens: &mut Tokenizer,
                   bindings: Bindings,
                   name: &str)
                   -> ParseResult<Vec<Expr>> {
    let mut arguments = Vec::new();
    if tokens.peek() == Some(")") {
        tokens.next();
        return Ok(arguments);
    }

    loop {
        if arguments.len() == MAX_ARGUMENTS {
            return Err(ParseError::TooManyArguments { name:     name.to_owned(),
                                                      max:      MAX_ARGUMENTS,
                                                      position: tokens.position(), });
        }
        arguments.push(parse_expression(tokens, bindings)?);

        match tokens.peek() {
            Some(",") => {
                tokens.next();
                match tokens.peek() {
                    Some(")" | ",") => {
                        return Err(ParseError::MissingArgument { name:     name.to_owned(),
                                                                 position: tokens.position(), });
                    },
                    None => {
                        return Err(ParseError::UnterminatedCall { name:     name.to_owned(),
                                                                  position: tokens.position(), });
                    },
                    Some(_) => {},
                }
            },
            Some(")") => {
                tokens.next();
                return Ok(arguments);
            },
            _ => {
                return Err(ParseError::UnterminatedCall { name:     name.to_owned(),
                                                          position: tokens.position(), });
            },
        }
    }
}
