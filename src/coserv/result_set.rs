// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::errors::Error;
use crate::corim::ReferenceValueTriple;
use ciborium::ser::into_writer;
use ciborium::Value;

const RESULT_SET_REFERENCE_VALUES_LABEL: u8 = 0;
const RESULT_SET_SOURCE_ARTIFACTS_LABEL: u8 = 11;

const QUAD_AUTHORITIES_LABEL: u8 = 1;
const QUAD_TRIPLE_LABEL: u8 = 2;

/// Media type of a COSE-signed CoRIM
pub const RIM_COSE_MEDIA_TYPE: &str = "application/rim+cose";

/// A reference value together with the keys that vouch for it
#[derive(Debug, Clone, PartialEq)]
pub struct RefValQuad {
    /// crypto-key-type-choice entries, may be empty
    pub authorities: Vec<Value>,
    pub rv_triple: ReferenceValueTriple,
}

impl RefValQuad {
    fn to_value(&self) -> Result<Value, Error> {
        let triple =
            Value::serialized(&self.rv_triple).map_err(|e| Error::Encoding(e.to_string()))?;

        let mut m = vec![];

        if !self.authorities.is_empty() {
            m.push((
                Value::Integer(QUAD_AUTHORITIES_LABEL.into()),
                Value::Array(self.authorities.clone()),
            ));
        }

        m.push((Value::Integer(QUAD_TRIPLE_LABEL.into()), triple));

        Ok(Value::Map(m))
    }
}

/// An artifact the result set was derived from, as a CMW record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceArtifact {
    pub media_type: String,
    pub value: Vec<u8>,
}

impl SourceArtifact {
    fn to_value(&self) -> Value {
        Value::Array(vec![
            Value::Text(self.media_type.clone()),
            Value::Bytes(self.value.clone()),
        ])
    }
}

/// Accumulates reference values.  Entries are only ever appended, in the
/// order they are added, with no deduplication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    rvq: Vec<RefValQuad>,
    source_artifacts: Vec<SourceArtifact>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reference value with no stated authority
    pub fn add_reference_values(&mut self, t: ReferenceValueTriple) -> &mut Self {
        self.rvq.push(RefValQuad {
            authorities: vec![],
            rv_triple: t,
        });
        self
    }

    pub fn add_source_artifact(&mut self, media_type: &str, value: &[u8]) -> &mut Self {
        self.source_artifacts.push(SourceArtifact {
            media_type: media_type.to_string(),
            value: value.to_vec(),
        });
        self
    }

    pub fn reference_values(&self) -> &[RefValQuad] {
        self.rvq.as_slice()
    }

    pub fn source_artifacts(&self) -> &[SourceArtifact] {
        self.source_artifacts.as_slice()
    }

    pub fn len(&self) -> usize {
        self.rvq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rvq.is_empty()
    }

    pub fn to_value(&self) -> Result<Value, Error> {
        let rvq = self
            .rvq
            .iter()
            .map(RefValQuad::to_value)
            .collect::<Result<Vec<Value>, Error>>()?;

        let mut m = vec![(
            Value::Integer(RESULT_SET_REFERENCE_VALUES_LABEL.into()),
            Value::Array(rvq),
        )];

        if !self.source_artifacts.is_empty() {
            m.push((
                Value::Integer(RESULT_SET_SOURCE_ARTIFACTS_LABEL.into()),
                Value::Array(
                    self.source_artifacts
                        .iter()
                        .map(SourceArtifact::to_value)
                        .collect(),
                ),
            ));
        }

        Ok(Value::Map(m))
    }

    /// CBOR encoding of the result-set map
    pub fn to_cbor(&self) -> Result<Vec<u8>, Error> {
        let mut buf: Vec<u8> = Vec::new();

        into_writer(&self.to_value()?, &mut buf).map_err(|e| Error::Encoding(e.to_string()))?;

        Ok(buf)
    }
}
