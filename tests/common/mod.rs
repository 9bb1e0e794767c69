// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use base64::{engine::general_purpose, Engine as _};
use ciborium::Value;
use rim_coserv::corim::{Identifier, UnsignedCorim};

fn int(i: i64) -> Value {
    Value::Integer(i.into())
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn encode(v: &Value) -> Vec<u8> {
    let mut buf = vec![];
    ciborium::ser::into_writer(v, &mut buf).unwrap();
    buf
}

/// reference-triple-record for one GH100 component with a SHA-256 digest
fn triple(component: &str) -> Value {
    let environment = Value::Map(vec![(
        int(0),
        Value::Map(vec![(int(1), text("NVIDIA")), (int(2), text("GH100"))]),
    )]);

    let measurement = Value::Map(vec![
        (int(0), text(component)),
        (
            int(1),
            Value::Map(vec![(
                int(2),
                Value::Array(vec![Value::Array(vec![
                    int(1),
                    Value::Bytes(vec![0x01; 32]),
                ])]),
            )]),
        ),
    ]);

    Value::Array(vec![environment, Value::Array(vec![measurement])])
}

fn comid(id: &str, triples: Vec<Value>) -> Vec<u8> {
    encode(&Value::Map(vec![
        (int(1), Value::Map(vec![(int(0), text(id))])),
        (int(4), Value::Map(vec![(int(0), Value::Array(triples))])),
    ]))
}

/// A signed CoRIM with `n` CoMIDs of `m` reference values each
pub fn signed_corim(n: usize, m: usize) -> Vec<u8> {
    let mut u = UnsignedCorim::new(Identifier::Text("cli-test".to_string()));

    for i in 0..n {
        let triples = (0..m)
            .map(|j| triple(&format!("component-{i}-{j}")))
            .collect();
        u.add_comid(&comid(&format!("comid-{i}"), triples)).unwrap();
    }

    let protected = encode(&Value::Map(vec![(int(1), int(-7))]));

    encode(&Value::Tag(
        18,
        Box::new(Value::Array(vec![
            Value::Bytes(protected),
            Value::Map(vec![]),
            Value::Bytes(u.to_cbor().unwrap()),
            Value::Bytes(vec![0x5a; 64]),
        ])),
    ))
}

/// A RIM service JSON body
pub fn service_response(corim: &[u8], rim_format: &str) -> String {
    serde_json::json!({
        "id": "NV_GPU_DRIVER_GH100_535.86.09",
        "rim": general_purpose::STANDARD.encode(corim),
        "sha256": "00",
        "last_updated": "2023-09-21T17:50:58.000Z",
        "rim_format": rim_format,
        "request_id": "cli"
    })
    .to_string()
}
