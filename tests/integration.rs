//! Integration tests for valuewire.
//!
//! These tests exercise the full path a value takes across a remote-call
//! boundary: encode, serialize to a transport format, parse back, decode.

use std::cell::RefCell;
use std::rc::Rc;

use valuewire::{
    decode, encode, Classified, CodecError, JsObject, PassThrough, Value, WireValue,
};

fn roundtrip(value: &Value) -> Value {
    let wire = encode(value, &PassThrough).unwrap();
    decode(&wire, &[]).unwrap()
}

/// Round-trip over the acyclic value space observably preserves the value.
#[test]
fn test_roundtrip_preserves_values() {
    let mut nested = JsObject::new();
    // Millisecond precision: that is what the wire format carries.
    nested.insert(
        "when",
        Value::Date("2021-03-04T05:06:07.890Z".parse().unwrap()),
    );
    nested.insert("pattern", Value::regexp("^a.*z$", "m"));
    nested.insert("empty", Value::array(vec![]));

    let cases = vec![
        Value::Undefined,
        Value::Null,
        Value::Bool(true),
        Value::Bool(false),
        Value::Number(0.0),
        Value::Number(-0.0),
        Value::Number(f64::NAN),
        Value::Number(f64::INFINITY),
        Value::Number(f64::NEG_INFINITY),
        Value::Number(123.456),
        Value::from(""),
        Value::from("héllo \"wörld\""),
        Value::array(vec![
            Value::Null,
            Value::Undefined,
            Value::Number(-0.0),
            Value::array(vec![Value::from("deep")]),
        ]),
        Value::object(nested),
    ];

    for value in &cases {
        assert_eq!(&roundtrip(value), value, "round-trip changed {value:?}");
    }
}

/// Round-trip survives a JSON transport in the middle.
#[test]
fn test_roundtrip_through_json_text() {
    let mut record = JsObject::new();
    record.insert("nan", Value::Number(f64::NAN));
    record.insert("neg_zero", Value::Number(-0.0));
    record.insert("null", Value::Null);
    record.insert("undef", Value::Undefined);
    let value = Value::object(record);

    let wire = encode(&value, &PassThrough).unwrap();
    let text = wire.to_json_string().unwrap();
    let parsed = WireValue::from_json_str(&text).unwrap();
    assert_eq!(parsed, wire);

    assert_eq!(decode(&parsed, &[]).unwrap(), value);
}

/// Round-trip survives a MsgPack transport in the middle.
#[test]
fn test_roundtrip_through_msgpack() {
    let value = Value::array(vec![
        Value::from(1),
        Value::Number(f64::INFINITY),
        Value::from("x"),
    ]);

    let wire = encode(&value, &PassThrough).unwrap();
    let bytes = wire.to_msgpack().unwrap();
    let parsed = WireValue::from_msgpack(&bytes).unwrap();

    assert_eq!(decode(&parsed, &[]).unwrap(), value);
}

/// Encoding an array that contains itself fails; the same array referenced
/// twice as siblings succeeds and both copies round-trip identically.
#[test]
fn test_cycle_rejected_sibling_sharing_allowed() {
    let cyclic = Rc::new(RefCell::new(Vec::new()));
    cyclic.borrow_mut().push(Value::Array(cyclic.clone()));
    assert!(matches!(
        encode(&Value::Array(cyclic), &PassThrough),
        Err(CodecError::CircularStructure)
    ));

    let shared = Value::array(vec![Value::from(1), Value::from(2)]);
    let siblings = Value::array(vec![shared.clone(), shared]);
    let decoded = roundtrip(&siblings);

    match decoded {
        Value::Array(items) => {
            let items = items.borrow();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0], items[1]);
        }
        other => panic!("expected array, got {other:?}"),
    }
}

/// A classifier that claims a value short-circuits to `{h: index}` no matter
/// the value's shape, and decode resolves it back out of the table.
#[test]
fn test_handle_short_circuit_end_to_end() {
    let classifier = |value: &Value| match value {
        Value::Object(_) => Ok(Classified::Handle(3)),
        other => Ok(Classified::FallThrough(other.clone())),
    };

    let mut remote = JsObject::new();
    remote.insert("anything", Value::from("at all"));
    let wire = encode(&Value::object(remote), &classifier).unwrap();
    assert_eq!(wire, WireValue::Handle { h: 3 });
    assert_eq!(wire.to_json_string().unwrap(), r#"{"h":3}"#);

    let table = vec![
        Value::Null,
        Value::Null,
        Value::Null,
        Value::from("resolved remote"),
    ];
    assert_eq!(
        decode(&wire, &table).unwrap(),
        Value::from("resolved remote")
    );
}

/// Handles nested inside containers resolve in place.
#[test]
fn test_handles_inside_containers() {
    let classifier = |value: &Value| match value {
        Value::Symbol => Ok(Classified::Handle(0)),
        other => Ok(Classified::FallThrough(other.clone())),
    };

    let value = Value::array(vec![Value::from("before"), Value::Symbol]);
    let wire = encode(&value, &classifier).unwrap();
    assert_eq!(wire.to_json_string().unwrap(), r#"{"a":["before",{"h":0}]}"#);

    let table = vec![Value::from(99)];
    let decoded = decode(&wire, &table).unwrap();
    assert_eq!(
        decoded,
        Value::array(vec![Value::from("before"), Value::from(99)])
    );
}

/// The exact JSON vocabulary other implementations must match.
#[test]
fn test_wire_vocabulary_bit_exact() {
    let mut record = JsObject::new();
    record.insert("u", Value::Undefined);
    record.insert("n", Value::Null);
    record.insert("z", Value::Number(-0.0));
    record.insert("d", Value::Date("2020-06-15T08:00:00Z".parse().unwrap()));
    record.insert("r", Value::regexp("x", "g"));
    record.insert("list", Value::array(vec![Value::Bool(true)]));

    let wire = encode(&Value::object(record), &PassThrough).unwrap();
    assert_eq!(
        wire.to_json_string().unwrap(),
        concat!(
            r#"{"o":{"u":{"v":"undefined"},"n":{"v":"null"},"z":{"v":"-0"},"#,
            r#""d":{"d":"2020-06-15T08:00:00.000Z"},"r":{"r":["x","g"]},"#,
            r#""list":{"a":[true]}}}"#
        )
    );
}

/// Getter failures drop the key; everything else still encodes, and the
/// result decodes to a record without it.
#[test]
fn test_partial_failure_tolerance_end_to_end() {
    let mut record = JsObject::new();
    record.insert("kept", Value::from(1));
    record.insert_getter("dropped", || {
        Err(valuewire::PropertyError("nope".into()))
    });
    record.insert("toJSON", Value::Function);

    let wire = encode(&Value::object(record), &PassThrough).unwrap();
    let decoded = decode(&wire, &[]).unwrap();

    match decoded {
        Value::Object(object) => {
            let object = object.borrow();
            assert_eq!(object.len(), 2);
            assert!(object.get("dropped").is_none());
            assert_eq!(
                object.get("toJSON").unwrap().read().unwrap(),
                Value::object(JsObject::new())
            );
        }
        other => panic!("expected object, got {other:?}"),
    }
}
