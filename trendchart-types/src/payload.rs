//! Loosely-typed access to a chart configuration payload.
//!
//! A payload is an untrusted JSON object. Values are read with the same
//! conversions a lenient JSON tree would apply: a property of the wrong type
//! is converted when a sensible conversion exists and replaced by the caller's
//! fallback otherwise.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::PayloadError;

pub const BUILD_AS_DOMAIN_PROPERTY: &str = "buildAsDomain";
pub const NUMBER_OF_BUILDS_PROPERTY: &str = "numberOfBuilds";
pub const NUMBER_OF_DAYS_PROPERTY: &str = "numberOfDays";

/// Wire form of a chart configuration, as accepted by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub build_as_domain: bool,
    pub number_of_builds: i32,
    pub number_of_days: i32,
}

/// Parse the first JSON value of `payload` and require it to be an object.
///
/// Anything after a complete first value is ignored.
///
/// # Errors
///
/// Returns an error if the payload holds no JSON value, is not valid JSON or
/// is valid JSON of another kind than an object.
pub fn parse_object(payload: &str) -> Result<Map<String, Value>, PayloadError> {
    let mut values = serde_json::Deserializer::from_str(payload).into_iter::<Value>();
    match values.next() {
        None => Err(PayloadError::Empty),
        Some(Err(err)) => Err(err.into()),
        Some(Ok(Value::Object(object))) => Ok(object),
        Some(Ok(other)) => Err(PayloadError::NotAnObject(kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read `value` as a boolean.
///
/// Integers of any width are true when non-zero, the strings `"true"` and
/// `"false"` are accepted with surrounding whitespace. Everything else yields
/// `fallback`.
#[must_use]
pub fn as_bool(value: &Value, fallback: bool) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => match integer_digits(&n.to_string()) {
            Some((_, digits)) => digits.bytes().any(|b| b != b'0'),
            None => fallback,
        },
        Value::String(s) => match trim(s) {
            "true" => true,
            "false" => false,
            _ => fallback,
        },
        Value::Null | Value::Array(_) | Value::Object(_) => fallback,
    }
}

/// Read `value` as a 32 bit integer.
///
/// Wide integers keep their low 32 bits, floating point numbers are truncated
/// toward zero and booleans map to `1` and `0`. Strings are parsed, see
/// [`parse_int`]. Everything else yields `fallback`.
#[must_use]
pub fn as_int(value: &Value, fallback: i32) -> i32 {
    match value {
        Value::Number(n) => {
            let raw = n.to_string();
            match integer_digits(&raw) {
                Some((negative, digits)) => low_bits(negative, digits),
                // Out of range exponents read as infinity and saturate
                None => raw.parse::<f64>().map_or(fallback, truncate),
            }
        }
        Value::Bool(b) => i32::from(*b),
        Value::String(s) => parse_int(s, fallback),
        Value::Null | Value::Array(_) | Value::Object(_) => fallback,
    }
}

/// Parse a textual integer.
///
/// An optionally signed run of digits must fit in an `i32`, otherwise the
/// fallback is used. Any other text is read as a floating point number and
/// truncated.
#[must_use]
pub fn parse_int(text: &str, fallback: i32) -> i32 {
    let text = trim(text);
    if text.is_empty() {
        return fallback;
    }
    let unsigned = text.strip_prefix('+').unwrap_or(text);
    let digits = unsigned.strip_prefix('-').unwrap_or(unsigned);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return unsigned.parse().unwrap_or(fallback);
    }
    unsigned.parse::<f64>().map_or(fallback, truncate)
}

// Strips ASCII control characters and spaces only, Unicode whitespace is kept.
fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

// Sign and digits of a number written in JSON integer syntax, `None` for
// numbers with a fraction or an exponent.
fn integer_digits(raw: &str) -> Option<(bool, &str)> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, raw),
    };
    let integral = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
    integral.then_some((negative, digits))
}

// Two's complement low 32 bits of an integer of any width.
#[allow(clippy::cast_possible_wrap)]
fn low_bits(negative: bool, digits: &str) -> i32 {
    let magnitude = digits.bytes().fold(0_u32, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(u32::from(b - b'0'))
    });
    let bits = if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };
    bits as i32
}

// Saturates at the i32 bounds, NaN becomes 0.
#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> i32 {
    value as i32
}
