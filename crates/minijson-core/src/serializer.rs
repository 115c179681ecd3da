//! Serializer — [`Value`] tree to compact JSON text.
//!
//! Rendering is fixed and not configurable: no whitespace between tokens,
//! object members in stored order, whole numbers without a fractional
//! part.

use crate::error::SerializeError;
use crate::value::Value;

/// Render `value` as compact JSON text.
///
/// The only failure case is reserved for non-string object keys, which the
/// current value model cannot represent; trees built from this crate's
/// parser always serialize.
pub fn stringify(value: &Value) -> Result<String, SerializeError> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &Value) -> Result<(), SerializeError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(out, *n),
        Value::String(s) => write_string(out, s),
        Value::Array(elements) => {
            out.push('[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, element)?;
            }
            out.push(']');
        }
        Value::Object(members) => {
            out.push('{');
            for (i, (key, value)) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, value)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

/// Canonical decimal rendering of a float. Whole values in `i64` range
/// print without a fractional part, negative zero collapses to `0`, and
/// non-finite values (unreachable via the parser) print as `null`.
fn write_number(out: &mut String, n: f64) {
    if !n.is_finite() {
        out.push_str("null");
        return;
    }
    let n = if n == 0.0 { 0.0 } else { n };
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        out.push_str(&format!("{}", n as i64));
    } else {
        out.push_str(&format!("{}", n));
    }
}

/// Quote and escape a string. Backslash, quote, and the named control
/// characters get their two-character forms; any other control character
/// becomes `\u` with four uppercase hex digits.
fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
