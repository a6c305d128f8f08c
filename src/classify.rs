//! Caller-supplied classification of values into handle references.
//!
//! The encoder knows nothing about what a "handle" represents. Before any of
//! its own type tests — for every value it encounters, including the root —
//! it asks the injected [`Classifier`] whether the value should be replaced
//! by a `{h: index}` reference. That lets the remote-object subsystem
//! intercept any value, regardless of shape, and redirect it to a handle
//! instead of structural encoding.
//!
//! # Example
//!
//! ```
//! use valuewire::{encode, Classified, Value, WireValue};
//!
//! // Claim every string as handle 0; pass everything else through.
//! let classifier = |value: &Value| match value {
//!     Value::String(_) => Ok(Classified::Handle(0)),
//!     other => Ok(Classified::FallThrough(other.clone())),
//! };
//!
//! let wire = encode(&Value::from("remote"), &classifier).unwrap();
//! assert_eq!(wire, WireValue::Handle { h: 0 });
//! ```

use crate::error::Result;
use crate::value::Value;

/// Outcome of classifying one value.
#[derive(Debug, Clone)]
pub enum Classified {
    /// Replace the value with a handle reference; recursion stops here.
    Handle(usize),
    /// Proceed with structural encoding on this (possibly coerced) value.
    FallThrough(Value),
}

/// Decides, per value, whether to substitute a handle reference for
/// structural encoding.
///
/// Implementations must be side-effect-free with respect to the value being
/// classified and answer in bounded time. Any error returned here propagates
/// unchanged out of [`encode`](crate::encode).
pub trait Classifier {
    /// Classify one value.
    ///
    /// # Errors
    ///
    /// Implementation-defined; surfaced to the encode caller as-is.
    fn classify(&self, value: &Value) -> Result<Classified>;
}

impl<F> Classifier for F
where
    F: Fn(&Value) -> Result<Classified>,
{
    fn classify(&self, value: &Value) -> Result<Classified> {
        self(value)
    }
}

/// Classifier that never claims a handle.
///
/// Every value falls through to structural encoding unchanged.
pub struct PassThrough;

impl Classifier for PassThrough {
    fn classify(&self, value: &Value) -> Result<Classified> {
        Ok(Classified::FallThrough(value.clone()))
    }
}
