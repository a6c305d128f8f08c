//! Codec module - the encoder and decoder.
//!
//! Two pure functions form the whole core:
//!
//! - [`encode`] walks an in-memory [`Value`](crate::Value) depth-first,
//!   classifies it, and produces a tagged [`WireValue`](crate::WireValue),
//!   delegating "is this a remote-object reference" decisions to the
//!   injected classifier.
//! - [`decode`] walks a tagged wire value depth-first and reconstructs the
//!   value shape, resolving `{h: index}` tags against a caller-supplied
//!   handle table.
//!
//! Both are leaf components with no shared state; each call is independent
//! and side-effect-free apart from the encoder's call-scoped visited set, so
//! concurrent calls on different values need no coordination.
//!
//! # Example
//!
//! ```
//! use valuewire::{decode, encode, PassThrough, Value};
//!
//! let value = Value::array(vec![Value::from(1), Value::Null, Value::Undefined]);
//! let wire = encode(&value, &PassThrough).unwrap();
//! let back = decode(&wire, &[]).unwrap();
//! assert_eq!(back, value);
//! ```

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;
