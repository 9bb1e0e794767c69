// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::errors::Error;
use ciborium::de::from_reader;
use ciborium::ser::into_writer;
use ciborium::Value;
use serde::de::DeserializeOwned;
use std::fmt;

/// Decode exactly one CBOR data item into `T`.  Input left over after the
/// item is an error.
pub fn decode_exact<T: DeserializeOwned>(buf: &[u8], what: &str) -> Result<T, Error> {
    let mut cursor: &[u8] = buf;

    let v: T = from_reader(&mut cursor).map_err(|e| Error::Syntax(format!("{what}: {e}")))?;

    if !cursor.is_empty() {
        return Err(Error::Syntax(format!(
            "{what}: {} bytes of trailing data",
            cursor.len()
        )));
    }

    Ok(v)
}

/// Decode exactly one CBOR data item
pub fn decode_value(buf: &[u8], what: &str) -> Result<Value, Error> {
    decode_exact(buf, what)
}

/// Encode a single CBOR data item
pub fn encode_value(v: &Value, what: &str) -> Result<Vec<u8>, Error> {
    let mut buf: Vec<u8> = Vec::new();
    into_writer(v, &mut buf).map_err(|e| Error::Syntax(format!("{what}: {e}")))?;
    Ok(buf)
}

/// Return the integer label of a map key, if it is one
pub fn int_key(k: &Value) -> Option<i128> {
    k.as_integer().map(|i| i.into())
}

pub fn to_map<'a>(v: &'a Value, what: &str) -> Result<&'a Vec<(Value, Value)>, Error> {
    v.as_map()
        .ok_or_else(|| Error::TypeMismatch(format!("{what} MUST be map")))
}

pub fn to_array<'a>(v: &'a Value, what: &str) -> Result<&'a Vec<Value>, Error> {
    v.as_array()
        .ok_or_else(|| Error::TypeMismatch(format!("{what} MUST be array")))
}

pub fn to_tstr(v: &Value, what: &str) -> Result<String, Error> {
    v.as_text()
        .map(str::to_string)
        .ok_or_else(|| Error::TypeMismatch(format!("{what} MUST be text string")))
}

/// Look up an integer-keyed entry in a CBOR map
pub fn lookup(m: &[(Value, Value)], label: i128) -> Option<&Value> {
    m.iter()
        .find(|(k, _)| int_key(k) == Some(label))
        .map(|(_, v)| v)
}

/// Identifiers that are either a text string or a 16-byte UUID, as used
/// for the CoRIM identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Text(String),
    /// `tagged` records whether the UUID came wrapped in #6.37
    Uuid { value: [u8; 16], tagged: bool },
}

const UUID_CBOR_TAG: u64 = 37;

impl Identifier {
    pub fn uuid(value: [u8; 16]) -> Self {
        Identifier::Uuid {
            value,
            tagged: false,
        }
    }

    pub fn decode(v: &Value, what: &str) -> Result<Self, Error> {
        match v {
            Value::Text(t) => Ok(Identifier::Text(t.clone())),
            Value::Bytes(b) => Self::from_uuid_bytes(b, false, what),
            Value::Tag(UUID_CBOR_TAG, inner) => match inner.as_ref() {
                Value::Bytes(b) => Self::from_uuid_bytes(b, true, what),
                _ => Err(Error::TypeMismatch(format!(
                    "{what}: tagged UUID MUST be byte string"
                ))),
            },
            _ => Err(Error::TypeMismatch(format!(
                "{what} MUST be text string or UUID"
            ))),
        }
    }

    fn from_uuid_bytes(b: &[u8], tagged: bool, what: &str) -> Result<Self, Error> {
        let value: [u8; 16] = b.try_into().map_err(|_| {
            Error::Sema(format!("{what}: UUID is {} bytes, expecting 16", b.len()))
        })?;
        Ok(Identifier::Uuid { value, tagged })
    }

    pub fn to_value(&self) -> Value {
        match self {
            Identifier::Text(t) => Value::Text(t.clone()),
            Identifier::Uuid {
                value,
                tagged: false,
            } => Value::Bytes(value.to_vec()),
            Identifier::Uuid {
                value,
                tagged: true,
            } => Value::Tag(UUID_CBOR_TAG, Box::new(Value::Bytes(value.to_vec()))),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Text(t) => write!(f, "{t}"),
            Identifier::Uuid { value: u, .. } => write!(
                f,
                "{}-{}-{}-{}-{}",
                hex::encode(&u[0..4]),
                hex::encode(&u[4..6]),
                hex::encode(&u[6..8]),
                hex::encode(&u[8..10]),
                hex::encode(&u[10..16])
            ),
        }
    }
}
