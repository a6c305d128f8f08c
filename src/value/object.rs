//! Keyed records with host-like properties.
//!
//! A [`JsObject`] preserves key insertion order and allows a property to be
//! backed by a fallible getter instead of a plain value, modelling host
//! objects whose property reads can throw (native accessors). The encoder
//! reads every property through [`Property::read`] and drops the ones that
//! fail.

use std::fmt;
use std::rc::Rc;

use crate::error::PropertyError;

use super::Value;

/// A fallible property accessor.
pub type Getter = Rc<dyn Fn() -> std::result::Result<Value, PropertyError>>;

/// One property of a [`JsObject`]: either a plain value or a getter.
#[derive(Clone)]
pub enum Property {
    /// A plain stored value.
    Value(Value),
    /// A getter invoked on every read; may fail.
    Getter(Getter),
}

impl Property {
    /// Read the property, invoking the getter if there is one.
    ///
    /// # Errors
    ///
    /// Returns the getter's error. Plain values never fail.
    pub fn read(&self) -> std::result::Result<Value, PropertyError> {
        match self {
            Property::Value(value) => Ok(value.clone()),
            Property::Getter(getter) => getter(),
        }
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Property::Getter(_) => f.write_str("Getter(..)"),
        }
    }
}

impl PartialEq for Property {
    /// Observable equality: two plain values compare structurally; a getter
    /// has no observable value, so it never compares equal to anything.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Property::Value(a), Property::Value(b)) => a == b,
            _ => false,
        }
    }
}

/// A plain keyed record with insertion-ordered string keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject {
    entries: Vec<(String, Property)>,
}

impl JsObject {
    /// Create a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a plain-value property.
    ///
    /// An existing key is overwritten in place and keeps its position;
    /// a new key is appended at the end.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.set(key.into(), Property::Value(value));
    }

    /// Set a getter-backed property.
    pub fn insert_getter<F>(&mut self, key: impl Into<String>, getter: F)
    where
        F: Fn() -> std::result::Result<Value, PropertyError> + 'static,
    {
        self.set(key.into(), Property::Getter(Rc::new(getter)));
    }

    fn set(&mut self, key: String, property: Property) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = property;
        } else {
            self.entries.push((key, property));
        }
    }

    /// Look up a property by key.
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, p)| p)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the record has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }
}

impl FromIterator<(String, Value)> for JsObject {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut object = JsObject::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}
