//! Error types for the access bridge.

use thiserror::Error;

/// Errors that can occur while querying the membership engine.
///
/// These never cross the hook boundary: the gateway converts every failure
/// into a deny-or-pass-through decision before answering the host.
#[derive(Debug, Error)]
pub enum AccessBridgeError {
    /// Membership engine query failed
    #[error("Membership engine error: {message}")]
    MembershipEngine {
        /// Error message
        message: String,
        /// Source error from the membership engine
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The capability query is not available in this engine version
    #[error("Capability query unsupported by membership engine {version}")]
    CapabilityUnsupported {
        /// Declared engine version
        version: semver::Version,
    },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal {
        /// Error message
        message: String,
        /// Source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AccessBridgeError {
    /// Create a membership engine error with a message only.
    pub fn membership(message: impl Into<String>) -> Self {
        Self::MembershipEngine {
            message: message.into(),
            source: None,
        }
    }

    /// Create a membership engine error with a source error.
    pub fn membership_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::MembershipEngine {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error with a message only.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error with a source error.
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
