//! Unified error type for reelhub.
//!
//! All crates funnel their failures into [`Error`], which carries enough context
//! for API handlers to derive an HTTP status code via [`Error::http_status`] and
//! a caller-safe message via [`Error::public_message`].

use std::fmt;

/// Fixed message returned to callers when the catalog credential is missing.
pub const CONFIGURATION_MESSAGE: &str = "Catalog API key is not configured";

/// Generic message returned to callers when the upstream catalog fails.
pub const UPSTREAM_MESSAGE: &str = "Failed to fetch data from the catalog";

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Unified error type covering all failure modes in reelhub.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The upstream credential (or another required setting) is missing.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The upstream catalog returned a non-success status, the request never
    /// reached it, or its body could not be decoded.
    #[error("Upstream error{}: {message}", status_suffix(.status))]
    Upstream {
        /// HTTP status returned upstream, `None` for transport or decode failures.
        status: Option<u16>,
        /// Upstream `status_message` or a description of the failure.
        message: String,
    },

    /// Request data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" [{s}]")).unwrap_or_default()
}

impl Error {
    /// Map this error to an appropriate HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::Configuration(_) => 500,
            Error::Upstream { .. } => 500,
            Error::Validation(_) => 400,
            Error::Io { .. } => 500,
            Error::Internal(_) => 500,
        }
    }

    /// Stable machine-readable code for response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Configuration(_) => "configuration_error",
            Error::Upstream { .. } => "upstream_error",
            Error::Validation(_) => "validation_error",
            Error::Io { .. } => "io_error",
            Error::Internal(_) => "internal_error",
        }
    }

    /// Message that is safe to show to API callers.
    ///
    /// Upstream status codes and messages are never exposed verbatim.
    pub fn public_message(&self) -> String {
        match self {
            Error::Configuration(_) => CONFIGURATION_MESSAGE.to_string(),
            Error::Upstream { .. } => UPSTREAM_MESSAGE.to_string(),
            Error::Validation(msg) => msg.clone(),
            Error::Io { .. } | Error::Internal(_) => INTERNAL_MESSAGE.to_string(),
        }
    }

    /// Convenience constructor for [`Error::Configuration`] with the missing
    /// credential message.
    pub fn missing_credential() -> Self {
        Error::Configuration(CONFIGURATION_MESSAGE.to_string())
    }

    /// Convenience constructor for [`Error::Upstream`].
    pub fn upstream(status: Option<u16>, message: impl fmt::Display) -> Self {
        Error::Upstream {
            status,
            message: message.to_string(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
