// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

//! Access to a RIM service: fetching a RIM by identifier and unpacking the
//! signed CoRIM from the JSON envelope the service wraps it in.

pub use self::client::{RimServiceClient, RimServiceConfig, DEFAULT_RIM_SERVICE_URL};
pub use self::errors::Error;
pub use self::response::{RimServiceResponse, CORIM_FORMAT};

mod base64;
mod client;
mod errors;
mod response;
