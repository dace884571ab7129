//! Error types for federation resolution.
//!
//! Every failure is surfaced to the immediate caller as one of the kinds
//! below; nothing is retried or masked inside the resolution layers, and a
//! lookup either yields a complete record or an error.

use thiserror::Error;

/// Result type alias using [`FederationError`].
pub type Result<T> = std::result::Result<T, FederationError>;

/// Main error type for all federation resolution operations.
#[derive(Clone, Debug, Error)]
pub enum FederationError {
    // ═══════════════════════════════════════════════════════════════════════════
    // INPUT ERRORS (raised before any network call)
    // ═══════════════════════════════════════════════════════════════════════════
    /// Input address has no domain separator, or an empty domain segment.
    #[error("Invalid Stellar address: {0}")]
    InvalidAddress(String),

    /// Bare username given to a client with no bound default domain.
    #[error("No default domain to qualify bare username: {0}")]
    UnknownDomain(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // DISCOVERY ERRORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// The well-known document could not be fetched (transport failure or
    /// non-success HTTP status).
    #[error("Federation discovery unavailable for '{domain}': {reason}")]
    DiscoveryUnavailable {
        /// Domain whose well-known document was requested.
        domain: String,
        /// Transport error or HTTP status description.
        reason: String,
    },

    /// The well-known document (or the endpoint URL inside it) could not be
    /// parsed.
    #[error("Malformed well-known document for '{domain}': {reason}")]
    DiscoveryMalformed {
        /// Domain whose well-known document was fetched.
        domain: String,
        /// Parser error description.
        reason: String,
    },

    /// The well-known document lacks a `FEDERATION_SERVER` string.
    #[error("No federation server advertised by: {0}")]
    NoFederationServer(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // QUERY ERRORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// The federation query failed at the transport or HTTP status level.
    #[error("Federation request failed: {detail}")]
    RequestFailed {
        /// HTTP status code, when the server produced a response.
        status: Option<u16>,
        /// The raw response body when one was received, otherwise the
        /// underlying transport error.
        detail: String,
    },
}

impl FederationError {
    /// Returns true if the failure was raised before any network call.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            FederationError::InvalidAddress(_) | FederationError::UnknownDomain(_)
        )
    }

    /// Returns true if the failure occurred during endpoint discovery.
    pub fn is_discovery_error(&self) -> bool {
        matches!(
            self,
            FederationError::DiscoveryUnavailable { .. }
                | FederationError::DiscoveryMalformed { .. }
                | FederationError::NoFederationServer(_)
        )
    }

    /// HTTP status of a failed query, when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FederationError::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FederationError::DiscoveryUnavailable {
            domain: "example.com".into(),
            reason: "HTTP 503".into(),
        };
        assert!(err.to_string().contains("example.com"));
        assert!(err.to_string().contains("HTTP 503"));

        let err = FederationError::InvalidAddress("nodomain".into());
        assert!(err.to_string().contains("nodomain"));
    }

    #[test]
    fn test_error_classification() {
        assert!(FederationError::InvalidAddress("x".into()).is_input_error());
        assert!(FederationError::UnknownDomain("x".into()).is_input_error());
        assert!(!FederationError::NoFederationServer("x".into()).is_input_error());

        assert!(FederationError::NoFederationServer("x".into()).is_discovery_error());
        assert!(FederationError::DiscoveryMalformed {
            domain: "x".into(),
            reason: "bad toml".into(),
        }
        .is_discovery_error());
        assert!(!FederationError::InvalidAddress("x".into()).is_discovery_error());
    }

    #[test]
    fn test_request_failed_status() {
        let with_response = FederationError::RequestFailed {
            status: Some(404),
            detail: "not found".into(),
        };
        assert_eq!(with_response.status(), Some(404));

        let transport = FederationError::RequestFailed {
            status: None,
            detail: "connection refused".into(),
        };
        assert_eq!(transport.status(), None);

        assert_eq!(FederationError::UnknownDomain("x".into()).status(), None);
    }
}
