// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

//! Reference values from a RIM service, as a CoSERV result set.
//!
//! This crate fetches a Reference Integrity Manifest from a RIM service
//! (by default the NVIDIA one), decodes the COSE-signed [CoRIM] it carries,
//! and copies the reference-value triples of every CoMID tag into a [CoSERV]
//! result set.
//!
//! The API allows:
//! * Fetching a RIM service response by RIM identifier
//! * Decoding a COSE-signed CoRIM and the CoMID tags inside it
//! * Accumulating reference values into a CoSERV result set and encoding it
//!
//! [CoRIM]: https://datatracker.ietf.org/doc/draft-ietf-rats-corim/
//! [CoSERV]: https://datatracker.ietf.org/doc/draft-ietf-rats-coserv/

pub mod corim;
pub mod coserv;
pub mod pipeline;
pub mod rim;

mod errors;
pub use errors::Error;

#[cfg(test)]
pub(crate) mod test_utils;
