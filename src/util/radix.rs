/// Renders `value` as lowercase hexadecimal without a prefix.
///
/// ## Example
/// ```
/// use expsolver::util::radix::to_hex;
///
/// assert_eq!(to_hex(255), "ff");
/// assert_eq!(to_hex(0), "0");
/// ```
#[must_use]
pub fn to_hex(value: u32) -> String {
    format!("{value:x}")
}

/// Renders `value` as binary digits.
///
/// The ungrouped form is a leading `0` followed by the significant bits, so
/// `5` renders as `0101` and `0` as `0`. The grouped form pads the
/// significant bits to a whole number of nibbles and separates the nibbles
/// with `_`.
///
/// ## Example
/// ```
/// use expsolver::util::radix::to_binary;
///
/// assert_eq!(to_binary(5, false), "0101");
/// assert_eq!(to_binary(0, false), "0");
/// assert_eq!(to_binary(31, true), "0001_1111");
/// assert_eq!(to_binary(0, true), "0000");
/// ```
#[must_use]
pub fn to_binary(value: u32, grouped: bool) -> String {
    let significant = if value == 0 { String::new() } else { format!("{value:b}") };

    if !grouped {
        return format!("0{significant}");
    }

    let width = significant.len().max(1).div_ceil(4) * 4;
    let padded = format!("{significant:0>width$}");
    padded.as_bytes()
          .chunks(4)
          .map(|nibble| String::from_utf8_lossy(nibble).into_owned())
          .collect::<Vec<_>>()
          .join("_")
}
