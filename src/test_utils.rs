// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

//! Fixture builders shared by the unit tests

use crate::corim::{decode_comid, reference_values, ReferenceValueTriple};
use ciborium::ser::into_writer;
use ciborium::Value;

pub const ES256: i32 = -7;

pub fn int(i: i64) -> Value {
    Value::Integer(i.into())
}

pub fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn encode(v: &Value) -> Vec<u8> {
    let mut buf = vec![];
    into_writer(v, &mut buf).unwrap();
    buf
}

/// An NVIDIA-flavoured reference-triple-record: a GPU environment and a
/// single named measurement with a version and a SHA-384 digest.
fn triple_value(model: &str, component: &str) -> Value {
    let environment = Value::Map(vec![(
        int(0),
        Value::Map(vec![(int(1), text("NVIDIA")), (int(2), text(model))]),
    )]);

    let measurement = Value::Map(vec![
        (int(0), text(component)),
        (
            int(1),
            Value::Map(vec![
                (int(0), Value::Map(vec![(int(0), text("96.00.5e.00.01"))])),
                (
                    int(2),
                    Value::Array(vec![Value::Array(vec![
                        int(7),
                        Value::Bytes(vec![0xab; 48]),
                    ])]),
                ),
            ]),
        ),
    ]);

    Value::Array(vec![environment, Value::Array(vec![measurement])])
}

/// A concise-mid-tag map holding `n` reference values, each for a distinct
/// component
pub fn comid_value(id: &str, n: usize) -> Value {
    let triples = (0..n)
        .map(|i| triple_value("GH100", &format!("{id}/component-{i}")))
        .collect();

    Value::Map(vec![
        (int(1), Value::Map(vec![(int(0), text(id))])),
        (int(4), Value::Map(vec![(int(0), Value::Array(triples))])),
    ])
}

pub fn comid_bytes(id: &str, n: usize) -> Vec<u8> {
    encode(&comid_value(id, n))
}

/// The reference values of `comid_bytes(id, n)`, decoded
pub fn comid_triples(id: &str, n: usize) -> Vec<ReferenceValueTriple> {
    reference_values(decode_comid(&comid_bytes(id, n)).unwrap())
}

/// A single decoded reference value
pub fn triple(model: &str, component: &str) -> ReferenceValueTriple {
    let c = Value::Map(vec![
        (int(1), Value::Map(vec![(int(0), text("single"))])),
        (
            int(4),
            Value::Map(vec![(
                int(0),
                Value::Array(vec![triple_value(model, component)]),
            )]),
        ),
    ]);

    reference_values(decode_comid(&encode(&c)).unwrap()).remove(0)
}

/// `#6.18([ protected, unprotected, payload, signature ])` with a dummy
/// signature
pub fn sign1(payload: &[u8]) -> Vec<u8> {
    let protected = encode(&Value::Map(vec![(int(1), int(ES256 as i64))]));

    encode(&Value::Tag(
        18,
        Box::new(Value::Array(vec![
            Value::Bytes(protected),
            Value::Map(vec![]),
            Value::Bytes(payload.to_vec()),
            Value::Bytes(vec![0x5a; 64]),
        ])),
    ))
}

/// Wrap an encoded COSE_Sign1 in the legacy #6.502 signed-corim tag
pub fn wrap_502(sign1: &[u8]) -> Vec<u8> {
    let inner: Value = ciborium::de::from_reader(sign1).unwrap();

    encode(&Value::Tag(502, Box::new(inner)))
}
