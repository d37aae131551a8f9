/// Parsing errors.
///
/// Defines every structural error that can stop preparation: unmatched
/// parentheses, malformed conditionals, unterminated argument lists and
/// identifiers that no registered resolver could ever answer.
pub mod parse_error;
/// Runtime errors.
///
/// Only raised by strict evaluation, when a resolver reports that it could
/// not answer a lookup or a call.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
