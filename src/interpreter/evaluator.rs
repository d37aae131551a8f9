/// Core evaluation logic.
///
/// Contains the evaluation `Context`, the `Strictness` setting and the
/// dispatch over node variants.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic, shift and comparison rules, including the integer
/// truncation shifts and comparisons apply.
pub mod binary;

/// Resolver-backed evaluation.
///
/// Evaluates variables and function calls by handing them to the registered
/// resolvers.
pub mod function;
