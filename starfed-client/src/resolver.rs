//! End-to-end address resolution.

use std::sync::Arc;

use starfed_core::error::{FederationError, Result};
use starfed_core::traits::HttpTransport;
use starfed_core::types::{domain_of, FederationRecord};
use tracing::{info, instrument};

use crate::discovery::resolve_for_domain_with;
use crate::transport::ReqwestTransport;

/// Resolves a fully qualified `name*domain` address to its federation
/// record.
///
/// Discovers the domain's federation endpoint through its well-known
/// document, then queries that endpoint by name. The address must carry a
/// domain; bare usernames are rejected before any request is sent.
#[instrument]
pub async fn resolve_address(address: &str) -> Result<FederationRecord> {
    resolve_address_with(address, Arc::new(ReqwestTransport::new())).await
}

/// Same as [`resolve_address`], with a caller-supplied transport.
#[instrument(skip(transport))]
pub async fn resolve_address_with(
    address: &str,
    transport: Arc<dyn HttpTransport>,
) -> Result<FederationRecord> {
    let domain =
        domain_of(address).ok_or_else(|| FederationError::InvalidAddress(address.to_string()))?;
    let client = resolve_for_domain_with(domain, transport).await?;
    let record = client.query_by_address(address).await?;
    info!(address, "Resolved federation record");
    Ok(record)
}
