// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use super::errors::Error;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::StatusCode;
use tracing::{debug, info};

/// Base URL of the NVIDIA RIM service
pub const DEFAULT_RIM_SERVICE_URL: &str = "https://rim.attestation.nvidia.com/v1/rim";

const USER_AGENT_VALUE: &str = concat!("rim-coserv/", env!("CARGO_PKG_VERSION"));

/// Where to find the RIM service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RimServiceConfig {
    /// base URL, the RIM identifier is appended as the last path segment
    pub base_url: String,
}

impl Default for RimServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RIM_SERVICE_URL.to_string(),
        }
    }
}

impl RimServiceConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

/// Thin HTTP client for the RIM service.  There is no timeout and no retry:
/// the transport defaults apply and a failed fetch is final.
#[derive(Debug, Clone)]
pub struct RimServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl RimServiceClient {
    pub fn new(config: &RimServiceConfig) -> Result<Self, Error> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|e| Error::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The URL queried for the given RIM identifier
    pub fn rim_url(&self, rim_id: &str) -> String {
        format!("{}/{}", self.base_url, rim_id)
    }

    /// Fetch the raw response body for the given RIM identifier.  Anything
    /// other than 200 OK is an error carrying the status and body.
    pub async fn fetch(&self, rim_id: &str) -> Result<Vec<u8>, Error> {
        if rim_id.is_empty() {
            return Err(Error::InvalidId("empty RIM identifier".to_string()));
        }

        let url = self.rim_url(rim_id);
        info!(url = %url, "requesting RIM file");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            // best effort: the status alone is enough to fail
            let body = response.text().await.unwrap_or_default();

            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Network(format!("reading response: {e}")))?;

        info!(
            bytes = body.len(),
            "received successful response from RIM service"
        );
        debug!(url = %url, "response body read");

        Ok(body.to_vec())
    }
}
