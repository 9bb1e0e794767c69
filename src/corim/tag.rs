// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::comid::{decode_comid, Comid};
use super::common::*;
use super::errors::Error;
use ciborium::Value;

/// Length of the CBOR tag header that prefixes every CoRIM tag
pub const TAG_PREFIX_LEN: usize = 3;

/// CBOR header of #6.505 (concise-swid-tag)
pub const COSWID_TAG: [u8; TAG_PREFIX_LEN] = [0xd9, 0x01, 0xf9];
/// CBOR header of #6.506 (concise-mid-tag)
pub const COMID_TAG: [u8; TAG_PREFIX_LEN] = [0xd9, 0x01, 0xfa];
/// CBOR header of #6.508 (concise-tl-tag)
pub const COTL_TAG: [u8; TAG_PREFIX_LEN] = [0xd9, 0x01, 0xfc];

const COMID_CBOR_TAG: u64 = 506;

/// The kind of a CoRIM tag, as told by its 3-byte prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Comid,
    Coswid,
    Cotl,
    Unknown,
}

/// How a tag is laid out in the CoRIM tags array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagLayout {
    /// a byte string holding prefix and payload
    Bytes,
    /// a tagged CBOR item, whose encoding starts with the prefix
    Item,
}

/// One entry of the CoRIM tags list: a type prefix followed by the encoded
/// tag payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    bytes: Vec<u8>,
    layout: TagLayout,
}

impl Tag {
    /// A tag carried as a byte string
    pub fn new(v: Vec<u8>) -> Self {
        Self {
            bytes: v,
            layout: TagLayout::Bytes,
        }
    }

    /// Wrap an encoded CoMID as #6.506(bytes .cbor concise-mid-tag)
    pub fn wrap_comid(comid: &[u8]) -> Result<Self, Error> {
        let tagged = Value::Tag(COMID_CBOR_TAG, Box::new(Value::Bytes(comid.to_vec())));

        Ok(Self {
            bytes: encode_value(&tagged, "CoMID tag")?,
            layout: TagLayout::Item,
        })
    }

    /// Build a tag from an element of the CoRIM tags array.  Byte strings
    /// carry the prefixed tag verbatim; any other item is taken as its own
    /// encoding.
    pub fn from_value(v: &Value) -> Result<Self, Error> {
        match v {
            Value::Bytes(b) => Ok(Self::new(b.clone())),
            other => Ok(Self {
                bytes: encode_value(other, "CoRIM tag")?,
                layout: TagLayout::Item,
            }),
        }
    }

    /// The element to put back in the CoRIM tags array, in the layout the
    /// tag came with
    pub fn to_value(&self) -> Result<Value, Error> {
        match self.layout {
            TagLayout::Bytes => Ok(Value::Bytes(self.bytes.clone())),
            TagLayout::Item => decode_value(&self.bytes, "CoRIM tag"),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    pub fn layout(&self) -> TagLayout {
        self.layout
    }

    /// Split into the type prefix and the remaining payload.  Returns `None`
    /// for tags too short to carry a prefix.
    pub fn split(&self) -> Option<(&[u8], &[u8])> {
        if self.bytes.len() < TAG_PREFIX_LEN {
            return None;
        }

        Some(self.bytes.split_at(TAG_PREFIX_LEN))
    }

    pub fn kind(&self) -> TagKind {
        match self.split() {
            Some((p, _)) if p == COMID_TAG => TagKind::Comid,
            Some((p, _)) if p == COSWID_TAG => TagKind::Coswid,
            Some((p, _)) if p == COTL_TAG => TagKind::Cotl,
            _ => TagKind::Unknown,
        }
    }

    /// Decode the payload as a CoMID.  Tags of any other kind yield `None`.
    pub fn comid(&self) -> Option<Result<Comid, Error>> {
        match self.split() {
            Some((prefix, payload)) if prefix == COMID_TAG => Some(decode_comid(payload)),
            _ => None,
        }
    }
}

impl From<&[u8]> for Tag {
    fn from(v: &[u8]) -> Self {
        Self::new(v.to_owned())
    }
}
