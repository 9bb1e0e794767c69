// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

//! Decoding of signed CoRIMs and of the CoMID tags they carry.
//!
//! The corim-map is decoded here only as far as its identifier, profile and
//! tags list: each tag is kept as raw bytes so it can be dispatched on its
//! 3-byte CBOR tag prefix.  CoMID payloads are handed to [`corim_rs`], whose
//! `ConciseMidTag` and `ReferenceTripleRecord` types carry the reference
//! values.
//!
//! # Example
//!
//! ```no_run
//! use rim_coserv::corim::{reference_values, SignedCorim};
//!
//! # let buf: Vec<u8> = vec![];
//! let s = SignedCorim::from_cose(&buf).expect("decoding signed CoRIM");
//!
//! for t in s.unsigned_corim.tags.iter() {
//!     if let Some(c) = t.comid() {
//!         let c = c.expect("decoding CoMID");
//!         println!("{} reference values", reference_values(c).len());
//!     }
//! }
//! ```

pub use self::comid::{decode_comid, reference_values, Comid, ReferenceValueTriple};
pub use self::common::Identifier;
pub use self::errors::Error;
pub use self::signed::SignedCorim;
pub use self::tag::{Tag, TagKind, TagLayout, COMID_TAG, COSWID_TAG, COTL_TAG, TAG_PREFIX_LEN};
pub use self::unsigned::{Profile, UnsignedCorim};

mod comid;
mod common;
mod errors;
mod signed;
mod tag;
mod unsigned;
