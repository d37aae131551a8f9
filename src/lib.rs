//! # expsolver
//!
//! expsolver parses arithmetic, shift, comparison and ternary expressions into
//! an abstract syntax tree and evaluates that tree to a single `f64`.
//! Identifiers and function calls are handed to caller-supplied resolvers, so
//! the host program decides what `t` or `inc(1, 2)` mean.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::ParseError, expression::Expression};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// a parsed expression as an exclusively owned tree. The tree is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one node variant per construct: constants, variables, calls,
///   arithmetic/shift operators, comparisons and conditionals.
/// - Maps operator symbols to operator variants and back.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Parse errors describe why a source text could not be turned into a tree
/// and where (by token position) the problem was detected. Runtime errors are
/// only produced by strict evaluation.
pub mod error;
/// The prepare/evaluate facade.
///
/// Owns the tokenizer, the registered resolvers and the retained tree. This is
/// the type most callers interact with.
pub mod expression;
/// Orchestrates tokenizing, literal decoding, parsing and evaluation.
///
/// # Responsibilities
/// - Splits raw text into tokens given an operator vocabulary.
/// - Decodes numeric literals in decimal, hexadecimal and binary form.
/// - Builds a precedence-correct tree and evaluates it against resolvers.
pub mod interpreter;
/// General utilities for numeric conversion and rendering.
pub mod util;

/// Parses and evaluates `source` without any resolvers, returning the
/// diagnostic when preparation fails.
///
/// Any expression that mentions a variable or calls a function fails here,
/// since nothing can resolve it.
///
/// # Errors
/// Returns the [`ParseError`] that stopped preparation.
///
/// # Examples
/// ```
/// use expsolver::try_solve;
///
/// assert_eq!(try_solve("(2+3)*4").unwrap(), 20.0);
/// assert!(try_solve("4<1?").is_err());
/// ```
pub fn try_solve(source: &str) -> Result<f64, ParseError> {
    let mut expression = Expression::new(source);
    expression.try_prepare()?;
    Ok(expression.evaluate())
}

/// Parses and evaluates `source` in one call, with no resolvers registered.
///
/// Returns `None` when preparation fails.
///
/// # Examples
/// ```
/// use expsolver::solve;
///
/// assert_eq!(solve("2+3*4"), Some(14.0));
/// assert_eq!(solve("1<<4"), Some(16.0));
/// assert_eq!(solve("t+1"), None);
/// ```
#[must_use]
pub fn solve(source: &str) -> Option<f64> {
    try_solve(source).ok()
}
