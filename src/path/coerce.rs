//! Key and index coercion.
//!
//! Integer segments are converted to the exact width of the container they
//! index. The conversion wraps like an `as` cast: a key of `257` looks up `1` in
//! a `u8`-keyed map. String segments are parsed as integers, with the base taken
//! from the prefix (`0x`, `0o`, `0b`, or a bare leading `0` for octal).

use std::fmt;

use super::ast::Segment;
use super::error::ResolveError;
use crate::value::{IntKind, Integer};

/// Why a string could not be read as an integer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyParseError {
    /// Not a well-formed integer literal.
    InvalidSyntax,
    /// Does not fit in 64 bits.
    OutOfRange,
    /// Has a minus sign but the target is unsigned.
    Negative,
}

impl fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyParseError::InvalidSyntax => f.write_str("invalid syntax"),
            KeyParseError::OutOfRange => f.write_str("value out of range"),
            KeyParseError::Negative => f.write_str("negative value for unsigned type"),
        }
    }
}

impl std::error::Error for KeyParseError {}

impl IntKind {
    /// Converts a signed value to this kind, wrapping when it does not fit.
    pub fn wrap_signed(&self, n: i64) -> Integer {
        match self {
            IntKind::I8 => Integer::I8(n as i8),
            IntKind::I16 => Integer::I16(n as i16),
            IntKind::I32 => Integer::I32(n as i32),
            IntKind::I64 => Integer::I64(n),
            IntKind::Isize => Integer::Isize(n as isize),
            IntKind::U8 => Integer::U8(n as u8),
            IntKind::U16 => Integer::U16(n as u16),
            IntKind::U32 => Integer::U32(n as u32),
            IntKind::U64 => Integer::U64(n as u64),
            IntKind::Usize => Integer::Usize(n as usize),
        }
    }

    /// Converts an unsigned value to this kind, wrapping when it does not fit.
    pub fn wrap_unsigned(&self, n: u64) -> Integer {
        match self {
            IntKind::I8 => Integer::I8(n as i8),
            IntKind::I16 => Integer::I16(n as i16),
            IntKind::I32 => Integer::I32(n as i32),
            IntKind::I64 => Integer::I64(n as i64),
            IntKind::Isize => Integer::Isize(n as isize),
            IntKind::U8 => Integer::U8(n as u8),
            IntKind::U16 => Integer::U16(n as u16),
            IntKind::U32 => Integer::U32(n as u32),
            IntKind::U64 => Integer::U64(n),
            IntKind::Usize => Integer::Usize(n as usize),
        }
    }

    pub fn wrap_integer(&self, n: Integer) -> Integer {
        if n.kind().is_signed() {
            self.wrap_signed(n.as_i64())
        } else {
            self.wrap_unsigned(n.as_u64())
        }
    }
}

/// Parses a signed integer literal.
pub fn parse_signed(text: &str) -> Result<i64, KeyParseError> {
    let (negative, digits) = split_sign(text);
    let magnitude = parse_magnitude(digits)?;
    if negative {
        if magnitude > i64::MIN.unsigned_abs() {
            return Err(KeyParseError::OutOfRange);
        }
        Ok((magnitude as i64).wrapping_neg())
    } else {
        i64::try_from(magnitude).map_err(|_| KeyParseError::OutOfRange)
    }
}

/// Parses an unsigned integer literal. Signs are not allowed: a leading `-`
/// is rejected even for zero, and a leading `+` is a syntax error.
pub fn parse_unsigned(text: &str) -> Result<u64, KeyParseError> {
    if text.starts_with('-') {
        return Err(KeyParseError::Negative);
    }
    if text.starts_with('+') {
        return Err(KeyParseError::InvalidSyntax);
    }
    parse_magnitude(text)
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn parse_magnitude(text: &str) -> Result<u64, KeyParseError> {
    let (radix, digits, prefixed) = split_radix(text);
    if digits.is_empty() && !prefixed {
        return Err(KeyParseError::InvalidSyntax);
    }
    if !underscores_ok(digits, prefixed) {
        return Err(KeyParseError::InvalidSyntax);
    }

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for ch in digits.chars() {
        if ch == '_' {
            continue;
        }
        let digit = ch.to_digit(radix).ok_or(KeyParseError::InvalidSyntax)?;
        value = value
            .checked_mul(radix as u64)
            .and_then(|v| v.checked_add(digit as u64))
            .ok_or(KeyParseError::OutOfRange)?;
        seen_digit = true;
    }

    // A bare "0" is the octal prefix with no further digits.
    if !seen_digit && !(radix == 8 && text == "0") {
        return Err(KeyParseError::InvalidSyntax);
    }
    Ok(value)
}

/// Returns the radix, the digits after the prefix, and whether a prefix was present.
fn split_radix(text: &str) -> (u32, &str, bool) {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &text[2..], true),
            b'o' | b'O' => return (8, &text[2..], true),
            b'b' | b'B' => return (2, &text[2..], true),
            _ => return (8, &text[1..], true),
        }
    }
    if text == "0" {
        return (8, "", true);
    }
    (10, text, false)
}

/// Underscores may only separate digits, or follow a base prefix.
fn underscores_ok(digits: &str, prefixed: bool) -> bool {
    let mut prev_underscore = false;
    for (i, ch) in digits.chars().enumerate() {
        if ch == '_' {
            if prev_underscore || (i == 0 && !prefixed) {
                return false;
            }
            prev_underscore = true;
        } else {
            prev_underscore = false;
        }
    }
    !prev_underscore
}

/// Converts a segment to a key of an integer-keyed map.
pub fn map_key(segment: &Segment, kind: IntKind) -> Result<Integer, ResolveError> {
    match segment {
        Segment::Signed(n) => Ok(kind.wrap_signed(*n)),
        Segment::Unsigned(n) => Ok(kind.wrap_unsigned(*n)),
        Segment::Key(text) => {
            let parsed = if kind.is_signed() {
                parse_signed(text).map(|n| kind.wrap_signed(n))
            } else {
                parse_unsigned(text).map(|n| kind.wrap_unsigned(n))
            };
            parsed.map_err(|source| ResolveError::UnparsableKey {
                segment: text.clone(),
                key_type: kind.to_string(),
                source,
            })
        }
        Segment::Wildcard => unreachable!("wildcard segments are expanded before key lookup"),
    }
}

/// Converts a segment to a position in a sequence of `len` elements.
///
/// Returns `Ok(None)` for negative or out-of-range indices.
pub fn sequence_index(segment: &Segment, len: usize) -> Result<Option<usize>, ResolveError> {
    let in_range = |n: u64| (n < len as u64).then_some(n as usize);
    match segment {
        Segment::Unsigned(n) => Ok(in_range(*n)),
        Segment::Signed(n) => Ok(u64::try_from(*n).ok().and_then(in_range)),
        Segment::Key(text) => {
            let n = parse_signed(text).map_err(|source| ResolveError::UnparsableIndex {
                segment: text.clone(),
                source,
            })?;
            Ok(u64::try_from(n).ok().and_then(in_range))
        }
        Segment::Wildcard => unreachable!("wildcard segments are expanded before index lookup"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_signed("42"), Ok(42));
        assert_eq!(parse_signed("-42"), Ok(-42));
        assert_eq!(parse_signed("+7"), Ok(7));
        assert_eq!(parse_unsigned("42"), Ok(42));
    }

    #[test]
    fn test_parse_prefixes() {
        assert_eq!(parse_signed("0x1F"), Ok(31));
        assert_eq!(parse_signed("0o17"), Ok(15));
        assert_eq!(parse_signed("017"), Ok(15));
        assert_eq!(parse_signed("0b101"), Ok(5));
        assert_eq!(parse_signed("0"), Ok(0));
        assert_eq!(parse_signed("-0x10"), Ok(-16));
    }

    #[test]
    fn test_parse_underscores() {
        assert_eq!(parse_signed("1_000"), Ok(1000));
        assert_eq!(parse_signed("0x_ff"), Ok(255));
        assert_eq!(parse_signed("_1"), Err(KeyParseError::InvalidSyntax));
        assert_eq!(parse_signed("1__0"), Err(KeyParseError::InvalidSyntax));
        assert_eq!(parse_signed("1_"), Err(KeyParseError::InvalidSyntax));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_signed(""), Err(KeyParseError::InvalidSyntax));
        assert_eq!(parse_signed("boo"), Err(KeyParseError::InvalidSyntax));
        assert_eq!(parse_signed(" "), Err(KeyParseError::InvalidSyntax));
        assert_eq!(parse_signed("0x"), Err(KeyParseError::InvalidSyntax));
        assert_eq!(parse_signed("08"), Err(KeyParseError::InvalidSyntax));
        assert_eq!(parse_signed("-"), Err(KeyParseError::InvalidSyntax));
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_signed("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(
            parse_signed("9223372036854775808"),
            Err(KeyParseError::OutOfRange)
        );
        assert_eq!(parse_unsigned("18446744073709551615"), Ok(u64::MAX));
        assert_eq!(
            parse_unsigned("18446744073709551616"),
            Err(KeyParseError::OutOfRange)
        );
    }

    #[test]
    fn test_unsigned_rejects_minus() {
        assert_eq!(parse_unsigned("-4"), Err(KeyParseError::Negative));
        assert_eq!(parse_unsigned("-0"), Err(KeyParseError::Negative));
        assert_eq!(parse_unsigned("+4"), Err(KeyParseError::InvalidSyntax));
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(IntKind::U8.wrap_signed(-1), Integer::U8(255));
        assert_eq!(IntKind::I8.wrap_unsigned(200), Integer::I8(-56));
        assert_eq!(IntKind::U16.wrap_integer(Integer::I64(65537)), Integer::U16(1));
    }

    #[test]
    fn test_map_key_from_string() {
        assert_eq!(
            map_key(&Segment::from("0x10"), IntKind::I32),
            Ok(Integer::I32(16))
        );
        assert!(matches!(
            map_key(&Segment::from("-4"), IntKind::Usize),
            Err(ResolveError::UnparsableKey {
                source: KeyParseError::Negative,
                ..
            })
        ));
    }

    #[test]
    fn test_sequence_index() {
        assert_eq!(sequence_index(&Segment::Unsigned(2), 3), Ok(Some(2)));
        assert_eq!(sequence_index(&Segment::Unsigned(3), 3), Ok(None));
        assert_eq!(sequence_index(&Segment::Signed(-1), 3), Ok(None));
        assert_eq!(sequence_index(&Segment::from("1"), 3), Ok(Some(1)));
        assert_eq!(sequence_index(&Segment::from("-1"), 3), Ok(None));
        assert!(sequence_index(&Segment::from("x"), 3).is_err());
    }
}
