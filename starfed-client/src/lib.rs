//! # Starfed Client
//!
//! Client-side Stellar federation resolution: well-known endpoint discovery
//! and typed federation lookups.
//!
//! Two collaborating pieces:
//!
//! - [`resolve_for_domain`]: fetches a domain's
//!   `https://www.<domain>/.well-known/stellar.toml`, reads the advertised
//!   `FEDERATION_SERVER`, and returns a [`FederationClient`] bound to it.
//! - [`FederationClient`]: queries a fixed endpoint by address, account ID,
//!   or transaction ID, one GET per call.
//!
//! [`resolve_address`] chains the two for the common case.
//!
//! ## Example
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> starfed_client::Result<()> {
//! let record = starfed_client::resolve_address("bob*stellar.org").await?;
//! println!("{:?}", record.account_id);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;
mod discovery;
mod endpoint;
mod resolver;
mod transport;

#[cfg(test)]
mod testutil;

pub use client::FederationClient;
pub use discovery::{resolve_for_domain, resolve_for_domain_with, well_known_url};
pub use endpoint::FederationConfig;
pub use resolver::{resolve_address, resolve_address_with};
pub use transport::ReqwestTransport;

// Re-export the core vocabulary so callers can depend on this crate alone.
pub use starfed_core::error::{FederationError, Result};
pub use starfed_core::traits::{HttpResponse, HttpTransport, TransportError};
pub use starfed_core::types::{FederationQuery, FederationRecord, QueryKind};
