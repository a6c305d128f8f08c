//! The decoder: wire values back to in-memory values.

use chrono::{DateTime, Utc};

use crate::error::{CodecError, Result};
use crate::value::{JsObject, Value};
use crate::wire::{Special, WireValue};

/// Decode a wire value, resolving `{h: index}` tags against `handles`.
///
/// `handles` is the ordered table of already-resolved objects supplied by
/// the handle registry; indices must be stable for the lifetime of one call.
/// Containers are rebuilt fresh, elements decoded depth-first in order; wire
/// values are trees by construction, so no cycle handling is needed here.
///
/// # Errors
///
/// - [`CodecError::HandleOutOfRange`] if a handle index is past the end of
///   the table.
/// - [`CodecError::InvalidDate`] if a `{d: ...}` string does not parse as an
///   ISO-8601 instant.
///
/// # Example
///
/// ```
/// use valuewire::{decode, Value, WireValue};
///
/// let table = vec![Value::from("resolved")];
/// let value = decode(&WireValue::Handle { h: 0 }, &table).unwrap();
/// assert_eq!(value, Value::from("resolved"));
/// ```
pub fn decode(wire: &WireValue, handles: &[Value]) -> Result<Value> {
    match wire {
        WireValue::Absent => Ok(Value::Undefined),
        WireValue::Bool(b) => Ok(Value::Bool(*b)),
        WireValue::Number(n) => Ok(Value::Number(*n)),
        WireValue::String(s) => Ok(Value::String(s.clone())),

        WireValue::Special { v } => Ok(match v {
            Special::Null => Value::Null,
            Special::Undefined => Value::Undefined,
            Special::NaN => Value::Number(f64::NAN),
            Special::Infinity => Value::Number(f64::INFINITY),
            Special::NegInfinity => Value::Number(f64::NEG_INFINITY),
            Special::NegZero => Value::Number(-0.0),
        }),

        WireValue::Date { d } => DateTime::parse_from_rfc3339(d)
            .map(|instant| Value::Date(instant.with_timezone(&Utc)))
            .map_err(|_| CodecError::InvalidDate(d.clone())),

        WireValue::RegExp { r: (source, flags) } => Ok(Value::RegExp {
            source: source.clone(),
            flags: flags.clone(),
        }),

        WireValue::Array { a } => {
            let mut items = Vec::with_capacity(a.len());
            for element in a {
                items.push(decode(element, handles)?);
            }
            Ok(Value::array(items))
        }

        WireValue::Object { o } => {
            let mut object = JsObject::new();
            for (key, element) in o {
                object.insert(key.clone(), decode(element, handles)?);
            }
            Ok(Value::object(object))
        }

        WireValue::Handle { h } => {
            handles
                .get(*h)
                .cloned()
                .ok_or(CodecError::HandleOutOfRange {
                    index: *h,
                    len: handles.len(),
                })
        }
    }
}
