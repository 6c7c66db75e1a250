//! Typed getters.
//!
//! Each getter resolves a path and converts the result, returning a zero
//! value when the path is missing, malformed, or leads to the wrong type.
//! Use [`resolve`](super::resolver::resolve) directly when those cases need to
//! be told apart.

use chrono::{DateTime, FixedOffset};

use super::ast::Segment;
use super::resolver::resolve;
use crate::value::{epoch, Value};

fn lookup(root: &Value, segments: &[Segment], getter: &str) -> Option<Value> {
    match resolve(root, segments) {
        Ok(found) => found.map(|v| v.into_owned()),
        Err(err) => {
            log::debug!("{} fell back to zero value: {}", getter, err);
            None
        }
    }
}

/// Returns the string at the path, or `""`.
///
/// Numbers kept as literal text are returned as that text.
pub fn get_string(root: &Value, segments: &[Segment]) -> String {
    match lookup(root, segments, "get_string") {
        Some(Value::String(s)) | Some(Value::Number(s)) => s,
        _ => String::new(),
    }
}

/// Returns the integer at the path as an `i64`, or `0`.
///
/// Integers of every width are accepted. Unsigned values above `i64::MAX` wrap.
/// Number text is read as a decimal integer. Floats are not integers and give `0`.
pub fn get_int(root: &Value, segments: &[Segment]) -> i64 {
    match lookup(root, segments, "get_int") {
        Some(Value::Int(n)) => n.as_i64(),
        Some(Value::Number(text)) => text.parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

/// Returns the truthiness of the value at the path.
///
/// Booleans pass through, non-empty strings are true, and numbers are true
/// when non-zero. Number text counts only through its decimal integer
/// reading. Everything else, including a missing value, is false.
pub fn get_bool(root: &Value, segments: &[Segment]) -> bool {
    match lookup(root, segments, "get_bool") {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Int(n)) => !n.is_zero(),
        Some(Value::Float(x)) => x != 0.0,
        Some(Value::Number(text)) => text.parse::<i64>().map_or(false, |n| n != 0),
        _ => false,
    }
}

/// Returns the timestamp at the path, or the Unix epoch.
///
/// Strings are parsed as RFC 3339, with or without fractional seconds.
pub fn get_time(root: &Value, segments: &[Segment]) -> DateTime<FixedOffset> {
    match lookup(root, segments, "get_time") {
        Some(Value::Time(t)) => t,
        Some(Value::String(s)) => parse_timestamp(&s).unwrap_or_else(epoch),
        _ => epoch(),
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text).ok()
}
