//! Canonical JSON for header and payload segments
//!
//! The signature covers the encoded JSON text, so the byte layout is fixed:
//! compact output, object keys in ascending order (serde_json's default
//! `BTreeMap`-backed [`Map`]), HTML-significant characters and the two
//! Unicode line separators escaped as `\uXXXX`, and floats written in
//! shortest form with an exponent only outside `1e-6 <= |x| < 1e21`.

use crate::error::{JwtError, JwtResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::Formatter;
use serde_json::{Map, Value};
use std::io;

/// Compact formatter with the escaping and float rules above
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_f64(value).as_bytes())
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            let escaped = match ch {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..index].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

// serde_json writes non-finite floats as `null` before reaching the formatter
fn format_f64(value: f64) -> String {
    let abs = value.abs();
    if abs == 0.0 || (1e-6..1e21).contains(&abs) {
        return value.to_string();
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Encode an object as canonical JSON bytes
///
/// # Errors
///
/// Returns [`JwtError::Encoding`] if serialization fails.
pub fn to_vec(object: &Map<String, Value>) -> JwtResult<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, CanonicalFormatter);
    object
        .serialize(&mut serializer)
        .map_err(JwtError::encoding)?;
    Ok(out)
}

/// Convert any serializable value into a JSON value
///
/// # Errors
///
/// Returns [`JwtError::Encoding`] if the value cannot be represented as JSON,
/// for example a map with non-string keys.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> JwtResult<Value> {
    serde_json::to_value(value).map_err(JwtError::encoding)
}

/// Convert a serializable value that must be a JSON object
///
/// # Errors
///
/// Returns [`JwtError::Encoding`] if serialization fails or the result is
/// not an object.
pub fn to_object<T: Serialize + ?Sized>(value: &T) -> JwtResult<Map<String, Value>> {
    match to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(JwtError::Encoding(format!(
            "expected a JSON object, got {}",
            kind_of(&other)
        ))),
    }
}

/// Parse bytes that must hold a single JSON object
pub(crate) fn parse_object(bytes: &[u8]) -> Result<Map<String, Value>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Convert an object into a caller type
pub(crate) fn from_object<T: DeserializeOwned>(
    object: &Map<String, Value>,
) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(object.clone()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
