//! Well-known federation endpoint discovery.
//!
//! A domain advertises its federation server in a TOML document at
//! `https://www.<domain>/.well-known/stellar.toml` under the
//! `FEDERATION_SERVER` key. Discovery fetches that document and returns a
//! [`FederationClient`] bound to the advertised endpoint.

use std::sync::Arc;

use starfed_core::constants::{FEDERATION_SERVER_KEY, WELL_KNOWN_HOST_PREFIX, WELL_KNOWN_PATH};
use starfed_core::error::{FederationError, Result};
use starfed_core::traits::HttpTransport;
use tracing::{debug, info, instrument};
use url::Url;

use crate::client::FederationClient;
use crate::endpoint::FederationConfig;
use crate::transport::ReqwestTransport;

/// Well-known document URL for a domain.
///
/// Always `https` on the `www.` host, regardless of how the federation
/// endpoint itself is served.
pub fn well_known_url(domain: &str) -> String {
    format!("https://{WELL_KNOWN_HOST_PREFIX}{domain}{WELL_KNOWN_PATH}")
}

/// Discovers the federation endpoint advertised by `domain` and returns a
/// client bound to it, with `domain` as the client's default domain.
#[instrument]
pub async fn resolve_for_domain(domain: &str) -> Result<FederationClient> {
    resolve_for_domain_with(domain, Arc::new(ReqwestTransport::new())).await
}

/// Same as [`resolve_for_domain`], with a caller-supplied transport.
///
/// The returned client keeps using the given transport for its queries.
#[instrument(skip(transport))]
pub async fn resolve_for_domain_with(
    domain: &str,
    transport: Arc<dyn HttpTransport>,
) -> Result<FederationClient> {
    let url = well_known_url(domain);
    debug!(url = %url, "Fetching well-known federation document");

    let response =
        transport
            .get(&url)
            .await
            .map_err(|e| FederationError::DiscoveryUnavailable {
                domain: domain.to_string(),
                reason: e.to_string(),
            })?;
    if !response.is_success() {
        return Err(FederationError::DiscoveryUnavailable {
            domain: domain.to_string(),
            reason: format!("HTTP {}", response.status),
        });
    }

    let document: toml::Value =
        toml::from_str(&response.body).map_err(|e| FederationError::DiscoveryMalformed {
            domain: domain.to_string(),
            reason: e.to_string(),
        })?;
    let server = document
        .get(FEDERATION_SERVER_KEY)
        .and_then(|value| value.as_str())
        .ok_or_else(|| FederationError::NoFederationServer(domain.to_string()))?;
    let server_url = Url::parse(server).map_err(|e| FederationError::DiscoveryMalformed {
        domain: domain.to_string(),
        reason: format!("{FEDERATION_SERVER_KEY} is not a valid URL: {e}"),
    })?;
    info!(domain, federation_server = %server_url, "Discovered federation endpoint");

    let config = FederationConfig::from_federation_url(&server_url, Some(domain.to_string()));
    Ok(FederationClient::with_transport(config, transport))
}
