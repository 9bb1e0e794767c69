// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::common::*;
use super::errors::Error;
use super::tag::Tag;
use ciborium::Value;
use std::fmt;

const UNSIGNED_CORIM_CBOR_TAG: u64 = 501;
const OID_CBOR_TAG: u64 = 111;

const CORIM_ID_LABEL: i128 = 0;
const CORIM_TAGS_LABEL: i128 = 1;
const CORIM_PROFILE_LABEL: i128 = 3;

/// profile-type-choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Profile {
    Uri(String),
    Oid(Vec<u8>),
}

impl Profile {
    fn decode(v: &Value) -> Result<Self, Error> {
        match v {
            Value::Text(t) => Ok(Profile::Uri(t.clone())),
            // the URI may also come as #6.32
            Value::Tag(32, inner) => Ok(Profile::Uri(to_tstr(inner, "profile")?)),
            Value::Tag(OID_CBOR_TAG, inner) => match inner.as_ref() {
                Value::Bytes(b) => Ok(Profile::Oid(b.clone())),
                _ => Err(Error::TypeMismatch("OID profile MUST be byte string".to_string())),
            },
            _ => Err(Error::TypeMismatch(
                "profile MUST be URI or OID".to_string(),
            )),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Profile::Uri(u) => Value::Text(u.clone()),
            Profile::Oid(o) => Value::Tag(OID_CBOR_TAG, Box::new(Value::Bytes(o.clone()))),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Uri(u) => write!(f, "{u}"),
            Profile::Oid(o) => write!(f, "oid:{}", hex::encode(o)),
        }
    }
}

/// The corim-map carried as payload of a signed CoRIM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedCorim {
    pub id: Identifier,
    pub tags: Vec<Tag>,
    pub profile: Option<Profile>,
}

impl UnsignedCorim {
    pub fn new(id: Identifier) -> Self {
        Self {
            id,
            tags: vec![],
            profile: None,
        }
    }

    pub fn add_tag(&mut self, t: Tag) -> &mut Self {
        self.tags.push(t);
        self
    }

    /// Append an encoded CoMID as a #6.506 tag
    pub fn add_comid(&mut self, comid: &[u8]) -> Result<&mut Self, Error> {
        let t = Tag::wrap_comid(comid)?;
        Ok(self.add_tag(t))
    }

    /// Decode a (possibly #6.501-tagged) corim-map
    pub fn from_cbor(buf: &[u8]) -> Result<UnsignedCorim, Error> {
        let v = decode_value(buf, "unsigned CoRIM")?;

        let v = match v {
            Value::Tag(UNSIGNED_CORIM_CBOR_TAG, inner) => *inner,
            Value::Tag(t, _) => {
                return Err(Error::Syntax(format!(
                    "expecting tag {UNSIGNED_CORIM_CBOR_TAG}, got {t}"
                )))
            }
            other => other,
        };

        let m = to_map(&v, "corim-map")?;

        let id = lookup(m, CORIM_ID_LABEL)
            .ok_or_else(|| Error::MissingField("corim-id".to_string()))
            .and_then(|x| Identifier::decode(x, "corim-id"))?;

        let tags = lookup(m, CORIM_TAGS_LABEL)
            .ok_or_else(|| Error::MissingField("tags".to_string()))
            .and_then(|x| to_array(x, "tags"))?
            .iter()
            .map(Tag::from_value)
            .collect::<Result<Vec<Tag>, Error>>()?;

        let profile = match lookup(m, CORIM_PROFILE_LABEL) {
            Some(p) => Some(Profile::decode(p)?),
            None => None,
        };

        Ok(UnsignedCorim { id, tags, profile })
    }

    /// Encode as #6.501(corim-map).  Each tag keeps the layout it was
    /// decoded or built with.
    pub fn to_cbor(&self) -> Result<Vec<u8>, Error> {
        let tags = self
            .tags
            .iter()
            .map(Tag::to_value)
            .collect::<Result<Vec<Value>, Error>>()?;

        let mut m = vec![
            (Value::Integer(0u8.into()), self.id.to_value()),
            (Value::Integer(1u8.into()), Value::Array(tags)),
        ];

        if let Some(p) = &self.profile {
            m.push((Value::Integer(3u8.into()), p.to_value()));
        }

        encode_value(
            &Value::Tag(UNSIGNED_CORIM_CBOR_TAG, Box::new(Value::Map(m))),
            "unsigned CoRIM",
        )
    }
}
