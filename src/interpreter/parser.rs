/// Binary operator parsing.
///
/// Implements the left-associative levels: comparison, shift, additive and
/// multiplicative.
pub mod binary;
/// Core parsing logic.
///
/// Contains the entry point for a full expression (the conditional level),
/// the shared `ParseResult` type and the resolver `Bindings`.
pub mod core;
/// Primary expression parsing.
///
/// Handles parenthesized groups, numeric literals, variables and function
/// calls.
pub mod primary;
/// Top-level statement parsing.
///
/// Parses every top-level expression in the input, one after another.
pub mod statement;
