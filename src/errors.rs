// Copyright 2023-2025 Contributors to the Veraison project.
// SPDX-License-Identifier: Apache-2.0

use crate::{corim, coserv, rim};

#[derive(thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Rim(#[from] rim::Error),
    #[error(transparent)]
    Corim(#[from] corim::Error),
    #[error(transparent)]
    Coserv(#[from] coserv::Error),
    #[error("I/O error: {0}")]
    Io(String),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Rim(e) => write!(f, "{:?}", e),
            Error::Corim(e) => write!(f, "{:?}", e),
            Error::Coserv(e) => write!(f, "{:?}", e),
            Error::Io(e) => write!(f, "{}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl Error {
    /// Process exit code for the CLI.  2 is left to clap for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Rim(rim::Error::InvalidId(_))
            | Self::Rim(rim::Error::Network(_))
            | Self::Rim(rim::Error::Status { .. }) => 3,

            Self::Rim(rim::Error::Envelope(_))
            | Self::Rim(rim::Error::Format(_))
            | Self::Rim(rim::Error::Base64(_)) => 4,

            Self::Corim(_) => 5,

            Self::Coserv(_) | Self::Io(_) => 6,
        }
    }
}
