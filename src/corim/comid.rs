// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::common::*;
use super::errors::Error;
use ciborium::Value;
use corim_rs::{ConciseMidTag, ReferenceTripleRecord};

/// A decoded concise-mid-tag
pub type Comid = ConciseMidTag<'static>;

/// A reference-triple-record: an environment and the measurements expected
/// of it
pub type ReferenceValueTriple = ReferenceTripleRecord<'static>;

/// Decode a CoMID from the payload of a CoMID tag.  The payload is either
/// the CoMID map itself or a byte string wrapping its encoding.  Trailing
/// data after the CoMID, at either level, is an error.
pub fn decode_comid(buf: &[u8]) -> Result<Comid, Error> {
    match decode_value(buf, "CoMID")? {
        Value::Bytes(inner) => decode_exact(&inner, "CoMID"),
        _ => decode_exact(buf, "CoMID"),
    }
}

/// The reference values of a CoMID, in order
pub fn reference_values(c: Comid) -> Vec<ReferenceValueTriple> {
    c.triples.reference_triples.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use hex_literal::hex;

    #[test]
    fn decode_map_payload() {
        let c = decode_comid(&comid_bytes("my-comid", 2)).expect("decoding CoMID");

        assert_eq!(reference_values(c).len(), 2);
    }

    #[test]
    fn decode_bstr_wrapped_payload() {
        let wrapped = encode_value(&Value::Bytes(comid_bytes("wrapped", 1)), "test").unwrap();

        let c = decode_comid(&wrapped).expect("decoding wrapped CoMID");

        assert_eq!(c, decode_comid(&comid_bytes("wrapped", 1)).unwrap());
    }

    #[test]
    fn trailing_data_after_comid() {
        let mut buf = comid_bytes("trailing", 1);
        buf.extend_from_slice(&hex!("ffff001337"));

        let r = decode_comid(&buf);

        assert_eq!(
            r.err(),
            Some(Error::Syntax("CoMID: 5 bytes of trailing data".to_string()))
        );
    }

    #[test]
    fn trailing_data_inside_wrapped_comid() {
        let mut inner = comid_bytes("trailing", 1);
        inner.push(0x00);
        let wrapped = encode_value(&Value::Bytes(inner), "test").unwrap();

        assert!(matches!(decode_comid(&wrapped), Err(Error::Syntax(_))));
    }

    #[test]
    fn missing_tag_identity() {
        let v = Value::Map(vec![(int(4), Value::Map(vec![]))]);

        let r = decode_comid(&encode_value(&v, "test").unwrap());

        assert!(matches!(r, Err(Error::Syntax(_))));
    }

    #[test]
    fn not_a_map() {
        assert!(decode_comid(&hex!("8100")).is_err());
    }

    #[test]
    fn truncated_input() {
        assert!(matches!(
            decode_comid(&hex!("a201")),
            Err(Error::Syntax(_))
        ));
    }
}
