//! Shared Error Types
//!
//! Errors raised by the intern data source and the loading plumbing around it.
//!
//! # Error Categories
//!
//! - `FetchFailed` - a data-source call could not produce its record
//! - `Cancelled` - the caller cancelled the fetch before it resolved
//! - `Serialization` - JSON decode/encode failures
//! - `Disconnected` - the result channel closed without a value
//!
//! # Usage
//!
//! ```rust
//! use intern_portal::shared::error::PortalError;
//!
//! let error = PortalError::fetch_failed("leaderboard", "connection reset");
//! assert!(error.to_string().contains("leaderboard"));
//! ```
use thiserror::Error;

/// Errors that can occur while loading intern program data
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PortalError {
    /// A data-source call failed
    #[error("Failed to fetch {resource}: {message}")]
    FetchFailed {
        /// Which record was being fetched
        resource: String,
        /// Human-readable error message
        message: String,
    },

    /// The fetch was cancelled through its token
    #[error("Fetch of {resource} was cancelled")]
    Cancelled {
        /// Which record was being fetched
        resource: String,
    },

    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Human-readable error message
        message: String,
    },

    /// Result channel closed before a value arrived
    #[error("Fetch task ended without a result")]
    Disconnected,
}

impl PortalError {
    /// Create a new fetch failure
    pub fn fetch_failed(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FetchFailed {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Create a new cancellation error
    pub fn cancelled(resource: impl Into<String>) -> Self {
        Self::Cancelled {
            resource: resource.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
