/// Characters that mark a token as numeric when they lead it.
pub const NUMERIC_START: &str = "-0123456789%$x";

/// The radix a literal token selects through its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// `$ff` or `xff`.
    Hexadecimal,
    /// `%101`.
    Binary,
    /// Anything else, parsed as a float.
    Decimal,
}

impl LiteralKind {
    /// Classifies a literal token by its prefix.
    ///
    /// # Example
    /// ```
    /// use expsolver::interpreter::literal::LiteralKind;
    ///
    /// assert_eq!(LiteralKind::of("$ff"), LiteralKind::Hexadecimal);
    /// assert_eq!(LiteralKind::of("x1A"), LiteralKind::Hexadecimal);
    /// assert_eq!(LiteralKind::of("%101"), LiteralKind::Binary);
    /// assert_eq!(LiteralKind::of("3.5"), LiteralKind::Decimal);
    /// ```
    #[must_use]
    pub fn of(text: &str) -> Self {
        match text.chars().next() {
            Some('$' | 'x') => Self::Hexadecimal,
            Some('%') => Self::Binary,
            _ => Self::Decimal,
        }
    }
}

/// Returns `true` when `c` can start a numeric literal.
#[must_use]
pub fn is_numeric_start(c: char) -> bool {
    NUMERIC_START.contains(c)
}

/// Decodes a literal token, negating the result when `negative` is set.
///
/// Decoding is best effort and never fails:
/// - hexadecimal digits are read until the first non-hex character,
/// - binary digits other than `1` count as `0`,
/// - decimal text uses its longest prefix that reads as a number, or `0`;
///   like C `atof` this includes `0x` hexadecimal float text.
///
/// # Example
/// ```
/// use expsolver::interpreter::literal::decode;
///
/// assert_eq!(decode("$ff", false), 255.0);
/// assert_eq!(decode("x1A", false), 26.0);
/// assert_eq!(decode("%101", false), 5.0);
/// assert_eq!(decode("4", true), -4.0);
/// assert_eq!(decode("4abc", false), 4.0);
/// assert_eq!(decode("0x1A", false), 26.0);
/// ```
#[must_use]
pub fn decode(text: &str, negative: bool) -> f64 {
    let value = match LiteralKind::of(text) {
        LiteralKind::Hexadecimal => decode_hex(&text[1..]),
        LiteralKind::Binary => decode_binary(&text[1..]),
        LiteralKind::Decimal => decode_decimal(text),
    };
    if negative { -value } else { value }
}

/// Reads hexadecimal digits most significant first, stopping at the first
/// character that is not one. Accumulation wraps at 64 bits.
#[allow(clippy::cast_precision_loss)]
fn decode_hex(digits: &str) -> f64 {
    let value = digits.chars()
                      .map_while(|c| c.to_digit(16))
                      .fold(0u64, |acc, digit| acc.wrapping_mul(16).wrapping_add(u64::from(digit)));
    value as f64
}

/// Each `1` contributes `2^position` counted from the right; every other
/// byte contributes nothing but still takes up a position.
fn decode_binary(digits: &str) -> f64 {
    digits.bytes()
          .fold(0.0, |acc, bit| acc * 2.0 + if bit == b'1' { 1.0 } else { 0.0 })
}

/// Reads the longest prefix of `text` that forms a number, the way C `atof`
/// does: an optional sign, then either `0x` hexadecimal float text or decimal
/// float text, `inf`, `infinity` or `nan`. Anything unreadable is `0`.
fn decode_decimal(text: &str) -> f64 {
    let (sign, body) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };

    let magnitude = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex) => decode_hex_float(hex),
        None => body[..float_prefix_len(body)].parse::<f64>().unwrap_or(0.0),
    };
    sign * magnitude
}

/// Length of the decimal float text at the start of `text`, or `0` when it
/// does not start with one.
fn float_prefix_len(text: &str) -> usize {
    for word in ["infinity", "inf", "nan"] {
        if text.get(..word.len()).is_some_and(|head| head.eq_ignore_ascii_case(word)) {
            return word.len();
        }
    }

    let bytes = text.as_bytes();
    let digits_from = |start: usize| bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let whole = digits_from(0);
    let mut end = whole;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        end += 1 + fraction;
    }
    if whole + fraction == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let digits = digits_from(exponent);
        if digits > 0 {
            end = exponent + digits;
        }
    }
    end
}

/// Reads hexadecimal float text after its `0x` prefix: hex digits, an
/// optional `.` fraction and an optional binary exponent `p[+-]digits`.
fn decode_hex_float(text: &str) -> f64 {
    let mut chars = text.chars().peekable();
    let mut value = 0.0;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(16)) {
        value = value * 16.0 + f64::from(digit);
        chars.next();
    }

    if chars.peek() == Some(&'.') {
        chars.next();
        let mut scale = 1.0 / 16.0;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(16)) {
            value += f64::from(digit) * scale;
            scale /= 16.0;
            chars.next();
        }
    }

    if matches!(chars.peek(), Some('p' | 'P')) {
        let rest: String = chars.skip(1).collect();
        let (negative, digits) = match rest.as_bytes().first() {
            Some(b'-') => (true, &rest[1..]),
            Some(b'+') => (false, &rest[1..]),
            _ => (false, rest.as_str()),
        };
        if value != 0.0 && digits.starts_with(|c: char| c.is_ascii_digit()) {
            let exponent = digits.bytes()
                                 .take_while(u8::is_ascii_digit)
                                 .fold(0i32, |acc, digit| {
                                     acc.saturating_mul(10).saturating_add(i32::from(digit - b'0'))
                                 });
            value *= 2f64.powi(if negative { -exponent } else { exponent });
        }
    }
    value
}
