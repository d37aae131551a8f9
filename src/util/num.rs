/// Truncates a float toward zero into a 32-bit integer.
///
/// Values outside the `i32` range saturate at its bounds and NaN maps to `0`,
/// so the conversion is total.
///
/// ## Example
/// ```
/// use expsolver::util::num::truncate_to_int;
///
/// assert_eq!(truncate_to_int(3.9), 3);
/// assert_eq!(truncate_to_int(-3.9), -3);
/// assert_eq!(truncate_to_int(1e20), i32::MAX);
/// assert_eq!(truncate_to_int(f64::NAN), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn truncate_to_int(value: f64) -> i32 {
    value as i32
}

/// Maps a boolean to `1.0` or `0.0`.
#[must_use]
pub const fn bool_to_f64(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Reinterprets a 32-bit integer's two's-complement bit pattern as unsigned.
///
/// ## Example
/// ```
/// use expsolver::util::num::to_bit_pattern;
///
/// assert_eq!(to_bit_pattern(5), 5);
/// assert_eq!(to_bit_pattern(-1), u32::MAX);
/// ```
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn to_bit_pattern(value: i32) -> u32 {
    value as u32
}
