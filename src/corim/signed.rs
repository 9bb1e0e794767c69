// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::common::*;
use super::errors::Error;
use super::unsigned::UnsignedCorim;
use ciborium::Value;
use cose::message::CoseMessage;

const SIGNED_CORIM_CBOR_TAG: u64 = 502;
const COSE_SIGN1_CBOR_TAG: u64 = 18;

/// A COSE_Sign1-protected CoRIM.  The signature is not checked: only the
/// envelope structure is decoded to get at the payload.
pub struct SignedCorim {
    /// Decoded CoRIM payload
    pub unsigned_corim: UnsignedCorim,
    /// COSE Sign1 envelope
    pub cose: CoseMessage,
    /// The signed CoRIM as received
    raw: Vec<u8>,
}

impl SignedCorim {
    /// Decode a signed CoRIM, i.e. `#6.18(COSE_Sign1)`, optionally wrapped
    /// in the legacy `#6.502` signed-corim tag.
    pub fn from_cose(buf: &[u8]) -> Result<SignedCorim, Error> {
        let v = decode_value(buf, "signed CoRIM")?;

        let sign1 = match v {
            Value::Tag(SIGNED_CORIM_CBOR_TAG, inner) => match *inner {
                Value::Tag(COSE_SIGN1_CBOR_TAG, _) => encode_value(&inner, "COSE_Sign1")?,
                _ => {
                    return Err(Error::Syntax(format!(
                        "expecting tag {COSE_SIGN1_CBOR_TAG} inside tag {SIGNED_CORIM_CBOR_TAG}"
                    )))
                }
            },
            Value::Tag(COSE_SIGN1_CBOR_TAG, _) => buf.to_vec(),
            Value::Tag(t, _) => {
                return Err(Error::Syntax(format!(
                    "expecting tag {COSE_SIGN1_CBOR_TAG}, got {t}"
                )))
            }
            _ => return Err(Error::Syntax("expecting tag type".to_string())),
        };

        let mut cose = CoseMessage::new_sign();
        cose.bytes = sign1;

        cose.init_decoder(None)
            .map_err(|e| Error::Cose(format!("{e:?}")))?;

        if cose.payload.is_empty() {
            return Err(Error::Cose("detached or empty payload".to_string()));
        }

        let unsigned_corim = UnsignedCorim::from_cbor(&cose.payload)?;

        Ok(SignedCorim {
            unsigned_corim,
            cose,
            raw: buf.to_vec(),
        })
    }

    /// The `alg` protected header parameter, if any
    pub fn alg(&self) -> Option<i32> {
        self.cose.header.alg
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.raw.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corim::{decode_comid, Comid, Identifier};
    use crate::test_utils::*;

    fn unsigned() -> UnsignedCorim {
        let mut u = UnsignedCorim::new(Identifier::Text("signed-corim-test".to_string()));
        u.add_comid(&comid_bytes("comid-0", 2)).unwrap();
        u
    }

    #[test]
    fn decode_sign1_ok() {
        let u = unsigned();
        let buf = sign1(&u.to_cbor().unwrap());

        let s = SignedCorim::from_cose(&buf).expect("decoding signed CoRIM");

        assert_eq!(s.unsigned_corim, u);
        assert_eq!(s.alg(), Some(ES256));
        assert_eq!(s.as_bytes(), buf.as_slice());
    }

    #[test]
    fn decode_legacy_502_wrapper_ok() {
        let u = unsigned();
        let buf = wrap_502(&sign1(&u.to_cbor().unwrap()));

        let s = SignedCorim::from_cose(&buf).expect("decoding #6.502 signed CoRIM");

        assert_eq!(s.unsigned_corim.tags.len(), 1);
    }

    #[test]
    fn reject_untagged() {
        let r = SignedCorim::from_cose(&[0x84, 0x40, 0xa0, 0xf6, 0x40]);

        assert!(matches!(r, Err(Error::Syntax(_))));
    }

    #[test]
    fn reject_wrong_tag() {
        // #6.98 is a multi-signer COSE_Sign, not allowed for CoRIM
        let r = SignedCorim::from_cose(&[0xd8, 0x62, 0x80]);

        assert!(matches!(r, Err(Error::Syntax(_))));
    }

    #[test]
    fn reject_garbage() {
        let r = SignedCorim::from_cose(b"not CBOR at all");

        assert!(r.is_err());
    }

    #[test]
    fn reject_bad_payload() {
        // a well-formed envelope around a payload that is no corim-map
        let buf = sign1(&[0x01]);

        let r = SignedCorim::from_cose(&buf);

        assert!(matches!(r, Err(Error::TypeMismatch(_))));
    }

    #[test]
    fn reject_trailing_data_after_envelope() {
        let mut buf = sign1(&unsigned().to_cbor().unwrap());
        buf.extend_from_slice(&[0x00, 0x00]);

        let r = SignedCorim::from_cose(&buf);

        assert_eq!(
            r.err(),
            Some(Error::Syntax(
                "signed CoRIM: 2 bytes of trailing data".to_string()
            ))
        );
    }

    #[test]
    fn comid_survives_the_envelope() {
        let c = comid_bytes("comid-x", 3);
        let mut u = UnsignedCorim::new(Identifier::Text("x".to_string()));
        u.add_comid(&c).unwrap();

        let s = SignedCorim::from_cose(&sign1(&u.to_cbor().unwrap())).unwrap();

        let d: Comid = s.unsigned_corim.tags[0].comid().unwrap().unwrap();
        assert_eq!(d, decode_comid(&c).unwrap());
    }
}
