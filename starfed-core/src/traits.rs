//! Common traits for federation resolution.
//!
//! The one seam this system needs is the HTTP transport: everything above it
//! (discovery, queries, the resolve-and-query chain) is pure request/response
//! mapping, so injecting the transport keeps all of it testable without a
//! network.

use async_trait::async_trait;
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// HTTP TRANSPORT TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Response captured from a single HTTP GET.
///
/// A transport returns this whenever the server produced *any* response,
/// success or not; callers decide what a non-success status means at their
/// layer.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Error raised by an [`HttpTransport`] when no response could be obtained
/// (connection failure, timeout, invalid request URL at the socket level).
#[derive(Clone, Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Interface for issuing a single HTTP GET.
///
/// Implementations might use:
/// - `reqwest` (the default, in `starfed-client`)
/// - A recorded fake (for tests)
///
/// A transport performs exactly one attempt per call: no retries, no caching,
/// and only whatever redirect and timeout behavior the implementation itself
/// defaults to.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET to `url` and returns the status and body, or a
    /// [`TransportError`] when no response arrived.
    async fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses() {
        let ok = HttpResponse {
            status: 200,
            body: String::new(),
        };
        assert!(ok.is_success());

        let created = HttpResponse {
            status: 201,
            body: String::new(),
        };
        assert!(created.is_success());

        let redirect = HttpResponse {
            status: 301,
            body: String::new(),
        };
        assert!(!redirect.is_success());

        let not_found = HttpResponse {
            status: 404,
            body: String::new(),
        };
        assert!(!not_found.is_success());
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
    }
}
