//! In-memory value model.
//!
//! [`Value`] is the closed set of values the codec can see on the in-memory
//! side of the boundary. Containers ([`Value::Array`], [`Value::Object`])
//! are shared via `Rc`, so a container can appear in several positions of a
//! value graph — or inside itself. The encoder distinguishes those two cases
//! by reference identity: sibling sharing is legal, ancestor-descendant
//! cycles are an error.
//!
//! # Example
//!
//! ```
//! use valuewire::{JsObject, Value};
//!
//! let mut point = JsObject::new();
//! point.insert("x", Value::Number(1.0));
//! point.insert("y", Value::Number(2.0));
//!
//! let value = Value::array(vec![Value::object(point), Value::from("label")]);
//! ```

mod object;

pub use object::{Getter, JsObject, Property};

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

/// An in-memory value.
#[derive(Debug, Clone)]
pub enum Value {
    /// No value.
    Undefined,
    /// An explicit null (distinct from `Undefined`).
    Null,
    /// A boolean.
    Bool(bool),
    /// A number, including `NaN`, signed infinities and signed zero.
    Number(f64),
    /// A string.
    String(String),
    /// A date/time instant.
    Date(DateTime<Utc>),
    /// An uncompiled regular expression literal. The codec carries the
    /// pattern source and flags verbatim and never compiles them.
    RegExp {
        /// Pattern source text.
        source: String,
        /// Flag characters (e.g. `"gi"`).
        flags: String,
    },
    /// An error-like object.
    Error {
        /// Error class name (e.g. `"TypeError"`).
        name: String,
        /// Error message.
        message: String,
        /// Already-combined stack rendering from a stack-capturing facility,
        /// when one was available.
        stack: Option<String>,
    },
    /// A symbol-like value. Opaque; encodes as `undefined`.
    Symbol,
    /// An opaque callable. Never invoked by the codec.
    Function,
    /// An ordered container with reference identity.
    Array(Rc<RefCell<Vec<Value>>>),
    /// A keyed record with reference identity and insertion-ordered keys.
    Object(Rc<RefCell<JsObject>>),
}

impl Value {
    /// Create an array value from items.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items)))
    }

    /// Create an object value from a record.
    pub fn object(object: JsObject) -> Self {
        Value::Object(Rc::new(RefCell::new(object)))
    }

    /// Create a regular-expression value.
    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Value::RegExp {
            source: source.into(),
            flags: flags.into(),
        }
    }

    /// Create an error value without a captured stack.
    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Value::Error {
            name: name.into(),
            message: message.into(),
            stack: None,
        }
    }

    /// Sign-bit-aware number equality: `NaN == NaN`, `-0 != 0`.
    pub(crate) fn number_eq(a: f64, b: f64) -> bool {
        (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
    }
}

impl PartialEq for Value {
    /// Observable equality.
    ///
    /// Numbers compare by sign bit and NaN-ness rather than `==`, so
    /// `NaN == NaN` and `-0 != 0`. Containers compare structurally (by
    /// contents, not identity); comparing cyclic values does not terminate.
    /// Callables and getter-backed properties never compare equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Symbol, Value::Symbol) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => Value::number_eq(*a, *b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (
                Value::RegExp {
                    source: sa,
                    flags: fa,
                },
                Value::RegExp {
                    source: sb,
                    flags: fb,
                },
            ) => sa == sb && fa == fb,
            (
                Value::Error {
                    name: na,
                    message: ma,
                    stack: ta,
                },
                Value::Error {
                    name: nb,
                    message: mb,
                    stack: tb,
                },
            ) => na == nb && ma == mb && ta == tb,
            (Value::Array(a), Value::Array(b)) => *a.borrow() == *b.borrow(),
            (Value::Object(a), Value::Object(b)) => *a.borrow() == *b.borrow(),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
