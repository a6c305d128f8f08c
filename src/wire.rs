//! The tagged, JSON-compatible wire representation.
//!
//! [`WireValue`] is the sole transport type and the bit-exact interop
//! contract: tag key names (`v`, `d`, `r`, `a`, `o`, `h`) and the literal
//! set for `v` are fixed vocabulary that peer implementations must match.
//!
//! | JSON shape | Meaning |
//! |---|---|
//! | bare boolean / number / string | primitive, carried as-is |
//! | `{"v": "null" \| "undefined" \| "NaN" \| "Infinity" \| "-Infinity" \| "-0"}` | value plain JSON cannot express |
//! | `{"d": "<ISO-8601>"}` | date/time instant |
//! | `{"r": [pattern, flags]}` | regular expression |
//! | `{"a": [...]}` | ordered container |
//! | `{"o": {...}}` | keyed record, key order preserved |
//! | `{"h": <integer>}` | remote-object handle |
//! | `null` | no value |
//!
//! The variant set is closed: a JSON object matching none of the tag shapes
//! is rejected at the deserialization boundary.
//!
//! # Example
//!
//! ```
//! use valuewire::WireValue;
//!
//! let wire = WireValue::from_json_str(r#"{"a": [1, {"v": "NaN"}]}"#).unwrap();
//! assert_eq!(wire.to_json_string().unwrap(), r#"{"a":[1.0,{"v":"NaN"}]}"#);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Literal names for values that plain JSON cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Special {
    /// `null`.
    #[serde(rename = "null")]
    Null,
    /// `undefined`.
    #[serde(rename = "undefined")]
    Undefined,
    /// Not-a-number.
    #[serde(rename = "NaN")]
    NaN,
    /// Positive infinity.
    #[serde(rename = "Infinity")]
    Infinity,
    /// Negative infinity.
    #[serde(rename = "-Infinity")]
    NegInfinity,
    /// Negative zero (distinct from positive zero).
    #[serde(rename = "-0")]
    NegZero,
}

/// One wire value: the closed tagged union carried by the transport.
///
/// Exactly one tag is populated per non-primitive wire value. Variants are
/// tried in declaration order during deserialization, so the JSON shape of
/// each tag must stay disjoint from the ones above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireValue {
    /// Bare boolean.
    Bool(bool),
    /// Bare finite number. Non-finite and negative-zero numbers travel as
    /// [`WireValue::Special`] instead.
    Number(f64),
    /// Bare string.
    String(String),
    /// `{"v": ...}` — value plain JSON cannot express.
    Special {
        /// The literal name.
        v: Special,
    },
    /// `{"d": ...}` — a date/time instant as an ISO-8601 string.
    Date {
        /// ISO-8601 serialization, millisecond precision, `Z` suffix.
        d: String,
    },
    /// `{"r": [pattern, flags]}` — a regular expression.
    RegExp {
        /// Pattern source and flag characters.
        r: (String, String),
    },
    /// `{"a": [...]}` — an ordered container.
    Array {
        /// Elements in order.
        a: Vec<WireValue>,
    },
    /// `{"o": {...}}` — a plain keyed record.
    Object {
        /// Entries in key order.
        o: IndexMap<String, WireValue>,
    },
    /// `{"h": index}` — a reference to an external object, resolved against
    /// the handle table at decode time.
    Handle {
        /// Index into the handle table.
        h: usize,
    },
    /// No value. Travels as JSON `null`.
    Absent,
}

impl WireValue {
    /// Convert to a `serde_json::Value`.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Build from a `serde_json::Value`.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON matches none of the tag shapes.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns error on malformed JSON or an unmatched tag shape.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialize to MsgPack bytes.
    ///
    /// Uses `to_vec_named` so tags travel as maps with key names, the format
    /// Node.js `@msgpack/msgpack` expects.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_msgpack(&self) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(self)?)
    }

    /// Parse from MsgPack bytes.
    ///
    /// # Errors
    ///
    /// Returns error on malformed input or an unmatched tag shape.
    pub fn from_msgpack(bytes: &[u8]) -> Result<Self> {
        Ok(rmp_serde::from_slice(bytes)?)
    }
}
