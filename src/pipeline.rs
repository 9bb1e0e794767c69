// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

//! From a RIM service response to a CoSERV result set: decode the envelope,
//! walk the CoRIM tags, and move every CoMID reference value across as-is.

use crate::corim::{reference_values, SignedCorim, Tag, UnsignedCorim};
use crate::coserv::{ResultSet, RIM_COSE_MEDIA_TYPE};
use crate::errors::Error;
use crate::rim::{RimServiceClient, RimServiceResponse};
use tracing::{debug, info};

/// Unpack the signed CoRIM from a RIM service response body
pub fn decode_response(body: &[u8]) -> Result<SignedCorim, Error> {
    let r = RimServiceResponse::parse(body)?;

    let corim_bytes = r.corim_bytes()?;
    info!(bytes = corim_bytes.len(), "decoded CoRIM data");

    let s = SignedCorim::from_cose(&corim_bytes)?;
    info!(
        corim_id = %s.unsigned_corim.id,
        tags = s.unsigned_corim.tags.len(),
        alg = ?s.alg(),
        "parsed COSE-signed CoRIM"
    );

    Ok(s)
}

/// Collect the reference values of all the CoMID tags in the CoRIM, in
/// order.  Tags of other kinds are skipped; a CoMID that fails to decode
/// stops the walk.
pub fn collect_reference_values(corim: &UnsignedCorim) -> Result<ResultSet, Error> {
    corim.tags.iter().try_fold(ResultSet::new(), transplant)
}

fn transplant(mut rs: ResultSet, t: &Tag) -> Result<ResultSet, Error> {
    let comid = match t.comid() {
        None => {
            debug!(kind = ?t.kind(), "skipping non-CoMID tag");
            return Ok(rs);
        }
        Some(c) => c?,
    };

    info!(tag_id = ?comid.tag_identity.tag_id, "found a CoMID tag");

    let triples = reference_values(comid);
    debug!(
        count = triples.len(),
        "adding reference value triples to the result"
    );

    for triple in triples {
        rs.add_reference_values(triple);
    }

    Ok(rs)
}

/// Decode a RIM service response body and build the matching result set.
/// With `with_source`, the signed CoRIM is attached as source artifact.
pub fn result_set_from_response(body: &[u8], with_source: bool) -> Result<ResultSet, Error> {
    let s = decode_response(body)?;

    let mut rs = collect_reference_values(&s.unsigned_corim)?;

    if with_source {
        rs.add_source_artifact(RIM_COSE_MEDIA_TYPE, s.as_bytes());
    }

    Ok(rs)
}

/// Fetch the given RIM and build the matching result set
pub async fn fetch_result_set(
    client: &RimServiceClient,
    rim_id: &str,
    with_source: bool,
) -> Result<ResultSet, Error> {
    let body = client.fetch(rim_id).await?;

    result_set_from_response(&body, with_source)
}
