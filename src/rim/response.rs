// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::base64;
use super::errors::Error;
use serde::{Deserialize, Deserializer};

/// The only `rim_format` this crate knows how to decode
pub const CORIM_FORMAT: &str = "CORIM";

/// The JSON envelope returned by the RIM service for a single RIM
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RimServiceResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,
    /// base64 (standard alphabet) encoding of the signed CoRIM
    #[serde(deserialize_with = "null_as_empty")]
    pub rim: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub sha256: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_updated: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub rim_format: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub request_id: String,
}

/// `null` is read as an empty string, like a missing field
fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(d).map(Option::unwrap_or_default)
}

impl RimServiceResponse {
    /// Deserialize a RIM service response.  Fields missing from the body are
    /// left empty; a body that is not a JSON object is rejected.
    pub fn parse(body: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(body).map_err(|e| Error::Envelope(e.to_string()))
    }

    /// Check that the declared format is CoRIM.
    pub fn check_format(&self) -> Result<(), Error> {
        if self.rim_format != CORIM_FORMAT {
            return Err(Error::Format(self.rim_format.clone()));
        }

        Ok(())
    }

    /// Return the raw signed CoRIM carried in the `rim` field.  The format is
    /// checked before any decoding is attempted.
    pub fn corim_bytes(&self) -> Result<Vec<u8>, Error> {
        self.check_format()?;

        base64::decode_str(&self.rim)
    }
}
