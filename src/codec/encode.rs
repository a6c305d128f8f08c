//! The encoder: in-memory values to wire values.

use std::collections::HashSet;
use std::rc::Rc;

use chrono::SecondsFormat;
use indexmap::IndexMap;

use crate::classify::{Classified, Classifier};
use crate::error::{CodecError, Result};
use crate::value::Value;
use crate::wire::{Special, WireValue};

/// Encode a value into its wire representation.
///
/// The classifier is consulted first, before any of the codec's own type
/// tests, for every value encountered (including the root). If it claims a
/// handle, encoding short-circuits to `{h: index}` and recursion stops;
/// otherwise encoding proceeds on the value it handed back.
///
/// Classification order after the handle check: symbol/undefined, null,
/// NaN, signed infinities, negative zero (by sign bit, not `==`), bare
/// primitives, error-like, date, regexp, array, then any other object.
///
/// # Errors
///
/// - [`CodecError::CircularStructure`] if a container contains itself
///   anywhere along one path. The same container appearing twice in sibling
///   positions is legal and encoded twice.
/// - Any error raised by the classifier, propagated unchanged.
///
/// # Example
///
/// ```
/// use valuewire::{encode, PassThrough, Special, Value, WireValue};
///
/// let wire = encode(&Value::Number(-0.0), &PassThrough).unwrap();
/// assert_eq!(wire, WireValue::Special { v: Special::NegZero });
///
/// let wire = encode(&Value::Number(0.0), &PassThrough).unwrap();
/// assert_eq!(wire, WireValue::Number(0.0));
/// ```
pub fn encode<C>(value: &Value, classifier: &C) -> Result<WireValue>
where
    C: Classifier + ?Sized,
{
    let mut visited = HashSet::new();
    encode_value(value, classifier, &mut visited)
}

/// Identity of a container currently being descended into.
type ContainerId = usize;

fn encode_value<C>(
    value: &Value,
    classifier: &C,
    visited: &mut HashSet<ContainerId>,
) -> Result<WireValue>
where
    C: Classifier + ?Sized,
{
    let value = match classifier.classify(value)? {
        Classified::Handle(index) => return Ok(WireValue::Handle { h: index }),
        Classified::FallThrough(value) => value,
    };

    match &value {
        Value::Symbol | Value::Undefined => Ok(special(Special::Undefined)),
        Value::Null => Ok(special(Special::Null)),
        Value::Number(n) if n.is_nan() => Ok(special(Special::NaN)),
        Value::Number(n) if *n == f64::INFINITY => Ok(special(Special::Infinity)),
        Value::Number(n) if *n == f64::NEG_INFINITY => Ok(special(Special::NegInfinity)),
        Value::Number(n) if *n == 0.0 && n.is_sign_negative() => Ok(special(Special::NegZero)),

        Value::Bool(b) => Ok(WireValue::Bool(*b)),
        Value::Number(n) => Ok(WireValue::Number(*n)),
        Value::String(s) => Ok(WireValue::String(s.clone())),

        Value::Error {
            name,
            message,
            stack,
        } => Ok(WireValue::String(match stack {
            // A stack-capturing facility already combined name, message and
            // trace into one string.
            Some(stack) => stack.clone(),
            None => format!("{name}: {message}"),
        })),

        Value::Date(instant) => Ok(WireValue::Date {
            d: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        }),

        Value::RegExp { source, flags } => Ok(WireValue::RegExp {
            r: (source.clone(), flags.clone()),
        }),

        Value::Array(items) => {
            let id = Rc::as_ptr(items) as ContainerId;
            if !visited.insert(id) {
                return Err(CodecError::CircularStructure);
            }
            let items = items.borrow();
            let mut encoded = Vec::with_capacity(items.len());
            for item in items.iter() {
                encoded.push(encode_value(item, classifier, visited)?);
            }
            visited.remove(&id);
            Ok(WireValue::Array { a: encoded })
        }

        Value::Object(object) => {
            let id = Rc::as_ptr(object) as ContainerId;
            if !visited.insert(id) {
                return Err(CodecError::CircularStructure);
            }
            let object = object.borrow();
            let mut encoded = IndexMap::with_capacity(object.len());
            for (key, property) in object.iter() {
                let item = match property.read() {
                    Ok(item) => item,
                    Err(e) => {
                        // Best-effort policy: native accessors will throw
                        // sometimes; drop the key and keep encoding.
                        tracing::debug!("Skipping unreadable property '{}': {}", key, e);
                        continue;
                    }
                };
                if key == "toJSON" && matches!(item, Value::Function) {
                    // Never invoke custom serialization hooks.
                    encoded.insert(key.to_string(), WireValue::Object { o: IndexMap::new() });
                } else {
                    encoded.insert(key.to_string(), encode_value(&item, classifier, visited)?);
                }
            }
            visited.remove(&id);
            Ok(WireValue::Object { o: encoded })
        }

        // A bare callable has no structural encoding; it travels as "no value".
        Value::Function => Ok(WireValue::Absent),
    }
}

fn special(v: Special) -> WireValue {
    WireValue::Special { v }
}
