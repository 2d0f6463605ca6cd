//! Birdeye Error Types
//!
//! Every per-token failure is reported as `InvalidResponse`, whatever the
//! underlying cause. The cause is kept as the error source.

use std::fmt;
use thiserror::Error;

use crate::ports::http::TransportError;

/// Which endpoint an address was queried against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Price,
    TokenOverview,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Price => write!(f, "token"),
            Endpoint::TokenOverview => write!(f, "token overview"),
        }
    }
}

/// Why a response could not be turned into a record
#[derive(Debug, Error)]
pub enum ResponseFault {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Malformed JSON body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(#[source] serde_json::Error),
}

impl ResponseFault {
    /// True when the request never produced a body and may succeed if retried
    pub fn is_transient(&self) -> bool {
        match self {
            ResponseFault::Transport(e) => e.is_transient(),
            _ => false,
        }
    }
}

/// Errors returned by the Birdeye client
#[derive(Debug, Error)]
pub enum BirdeyeError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid response received for {endpoint}: {address}")]
    InvalidResponse {
        endpoint: Endpoint,
        address: String,
        #[source]
        source: ResponseFault,
    },

    #[error("Unrecognised method \"{method}\" passed for query - {url}")]
    UnsupportedMethod { method: String, url: String },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl BirdeyeError {
    pub(crate) fn invalid_response(
        endpoint: Endpoint,
        address: &str,
        source: impl Into<ResponseFault>,
    ) -> Self {
        BirdeyeError::InvalidResponse {
            endpoint,
            address: address.to_string(),
            source: source.into(),
        }
    }

    /// Address named by an `InvalidResponse`
    pub fn address(&self) -> Option<&str> {
        match self {
            BirdeyeError::InvalidResponse { address, .. } => Some(address),
            _ => None,
        }
    }

    /// Underlying cause of an `InvalidResponse`
    pub fn fault(&self) -> Option<&ResponseFault> {
        match self {
            BirdeyeError::InvalidResponse { source, .. } => Some(source),
            _ => None,
        }
    }
}
