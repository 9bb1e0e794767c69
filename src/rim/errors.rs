// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

#[derive(thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid RIM identifier: {0}")]
    InvalidId(String),
    #[error("HTTP request error: {0}")]
    Network(String),
    #[error("error response from RIM service: {status}\nResponse body: {body}")]
    Status { status: u16, body: String },
    #[error("malformed RIM service response: {0}")]
    Envelope(String),
    #[error("expected RIM to be formatted as CORIM, but the actual format is {0}")]
    Format(String),
    #[error("failed to base64 decode the RIM byte string: {0}")]
    Base64(String),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidId(e)
            | Error::Network(e)
            | Error::Envelope(e)
            | Error::Format(e)
            | Error::Base64(e) => {
                write!(f, "{}", e)
            }
            Error::Status { status, body } => write!(f, "{} {}", status, body),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
