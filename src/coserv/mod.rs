// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

//! The CoSERV result set that reference values are transplanted into.

pub use self::errors::Error;
pub use self::result_set::{RefValQuad, ResultSet, SourceArtifact, RIM_COSE_MEDIA_TYPE};

mod errors;
mod result_set;
