//! Typed queries against a fixed federation endpoint.

use std::fmt;
use std::sync::Arc;

use starfed_core::error::{FederationError, Result};
use starfed_core::traits::HttpTransport;
use starfed_core::types::{is_qualified, qualify, FederationQuery, FederationRecord};
use tracing::{debug, instrument};
use url::Url;

use crate::endpoint::FederationConfig;
use crate::transport::ReqwestTransport;

/// Client bound to a single federation endpoint.
///
/// Construction is infallible and performs no I/O. Each lookup issues one
/// GET with `type` and `q` parameters and parses the JSON body into a
/// [`FederationRecord`].
#[derive(Clone)]
pub struct FederationClient {
    config: FederationConfig,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for FederationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FederationClient")
            .field("config", &self.config)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl FederationClient {
    /// Creates a client that talks to the configured endpoint over HTTP.
    pub fn new(config: FederationConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Creates a client with a caller-supplied transport.
    pub fn with_transport(config: FederationConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let base_url = config.base_url();
        Self {
            config,
            base_url,
            transport,
        }
    }

    /// Configuration this client was built from.
    pub fn config(&self) -> &FederationConfig {
        &self.config
    }

    /// Endpoint URL queries are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Looks up the federation record for a Stellar address.
    ///
    /// A qualified `name*domain` address is sent verbatim. A bare username
    /// is first qualified with the configured default domain; without one
    /// the lookup fails before any request is sent.
    #[instrument(skip(self))]
    pub async fn query_by_address(&self, address: &str) -> Result<FederationRecord> {
        debug!(address, "Looking up federation record by address");
        let query = if is_qualified(address) {
            FederationQuery::name(address)
        } else {
            let domain = self
                .config
                .domain
                .as_deref()
                .ok_or_else(|| FederationError::UnknownDomain(address.to_string()))?;
            FederationQuery::name(qualify(address, domain))
        };
        self.lookup(query).await
    }

    /// Looks up the federation record for a Stellar account ID.
    #[instrument(skip(self))]
    pub async fn query_by_account_id(&self, account_id: &str) -> Result<FederationRecord> {
        debug!(account_id, "Looking up federation record by account ID");
        self.lookup(FederationQuery::id(account_id)).await
    }

    /// Looks up the federation record behind a transaction ID.
    #[instrument(skip(self))]
    pub async fn query_by_transaction_id(&self, transaction_id: &str) -> Result<FederationRecord> {
        debug!(transaction_id, "Looking up federation record by transaction ID");
        self.lookup(FederationQuery::txid(transaction_id)).await
    }

    /// Sends a prepared query to the endpoint.
    #[instrument(skip(self))]
    pub async fn lookup(&self, query: FederationQuery) -> Result<FederationRecord> {
        let url = Url::parse_with_params(&self.base_url, query.as_params()).map_err(|e| {
            FederationError::RequestFailed {
                status: None,
                detail: format!("could not build query URL: {e}"),
            }
        })?;
        debug!(url = %url, "Sending federation query");

        let response = self.transport.get(url.as_str()).await.map_err(|e| {
            FederationError::RequestFailed {
                status: None,
                detail: e.to_string(),
            }
        })?;

        if !response.is_success() {
            return Err(FederationError::RequestFailed {
                status: Some(response.status),
                detail: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| FederationError::RequestFailed {
            status: Some(response.status),
            detail: format!("malformed federation record: {e}"),
        })
    }
}
