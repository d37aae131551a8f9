/// Numeric conversion helpers.
///
/// This module provides the float-to-integer truncation that shifts and
/// comparisons rely on, and the boolean-to-float mapping comparisons return.
/// Conversions never panic: out-of-range values saturate and NaN becomes 0.
pub mod num;
/// Integer rendering helpers.
///
/// Renders integers as hexadecimal and as binary digit strings, optionally
/// grouped in nibbles, the way the command-line front end prints results.
pub mod radix;
