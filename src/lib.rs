//! # valuewire
//!
//! Bidirectional value codec for remote-call boundaries.
//!
//! Converts in-memory [`Value`]s into a transport-safe, JSON-compatible
//! [`WireValue`] and back, preserving distinctions plain JSON cannot express
//! (`undefined` vs `null`, `NaN`, signed zero, infinities), carrying opaque
//! remote-object references as `{h: index}` handles, and rejecting cyclic
//! structures.
//!
//! ## Architecture
//!
//! - **Encoder** ([`encode`]): depth-first walk that classifies each value,
//!   asking the injected [`Classifier`] first whether the value should be
//!   replaced by a handle reference.
//! - **Decoder** ([`decode`]): depth-first reconstruction, resolving handle
//!   tags against a caller-supplied table of live values.
//!
//! The transport/RPC layer that moves encoded values and the registry that
//! assigns handle indices live outside this crate; the codec only carries
//! the integer.
//!
//! ## Example
//!
//! ```
//! use valuewire::{decode, encode, JsObject, PassThrough, Value};
//!
//! let mut user = JsObject::new();
//! user.insert("name", Value::from("ada"));
//! user.insert("score", Value::Number(f64::NAN));
//!
//! let wire = encode(&Value::object(user), &PassThrough).unwrap();
//! assert_eq!(
//!     wire.to_json_string().unwrap(),
//!     r#"{"o":{"name":"ada","score":{"v":"NaN"}}}"#
//! );
//!
//! let back = decode(&wire, &[]).unwrap();
//! assert_eq!(encode(&back, &PassThrough).unwrap(), wire);
//! ```

pub mod classify;
pub mod codec;
pub mod error;
pub mod value;
pub mod wire;

pub use classify::{Classified, Classifier, PassThrough};
pub use codec::{decode, encode};
pub use error::{CodecError, PropertyError, Result};
pub use value::{Getter, JsObject, Property, Value};
pub use wire::{Special, WireValue};
