//! Error taxonomy of the Site24x7 REST client
//!
//! Every non-2xx/3xx reply becomes either a plain status error or, when the
//! server sent a structured error body, an extended status error carrying the
//! vendor error code and info payload.

use serde_json::{Map, Value};
use thiserror::Error;

pub const NOT_FOUND: u16 = 404;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{message}")]
    ExtendedStatus {
        status: u16,
        message: String,
        error_code: i64,
        error_info: Map<String, Value>,
    },
    #[error("{method} {url}: {source}")]
    Transport {
        method: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("giving up after {attempts} attempts due to: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<ApiError>,
    },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("oauth2: {0}")]
    OAuth(String),
    #[error("invalid request url {url}")]
    InvalidUrl { url: String },
    #[error("failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn extended_status(
        status: u16,
        message: impl Into<String>,
        error_code: i64,
        error_info: Map<String, Value>,
    ) -> Self {
        Self::ExtendedStatus {
            status,
            message: message.into(),
            error_code,
            error_info,
        }
    }

    /// HTTP status carried by the error, if it is a status error at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::ExtendedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_status_error(&self) -> bool {
        self.status_code().is_some()
    }

    pub fn is_extended_status_error(&self) -> bool {
        matches!(self, Self::ExtendedStatus { .. })
    }

    pub fn error_code(&self) -> Option<i64> {
        match self {
            Self::ExtendedStatus { error_code, .. } => Some(*error_code),
            _ => None,
        }
    }

    pub fn has_status_code(&self, code: u16) -> bool {
        self.status_code() == Some(code)
    }

    pub fn is_not_found(&self) -> bool {
        self.has_status_code(NOT_FOUND)
    }
}
