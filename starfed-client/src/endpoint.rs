//! Federation endpoint configuration.

use serde::{Deserialize, Serialize};
use starfed_core::constants::{DEFAULT_FEDERATION_PATH, DEFAULT_HOSTNAME, DEFAULT_PORT};
use url::Url;

/// Where a federation server lives and, optionally, which domain it
/// answers for.
///
/// A config is plain data: building one never touches the network and
/// never fails. [`crate::FederationClient`] turns it into request URLs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FederationConfig {
    /// Use `https` instead of `http`.
    pub secure: bool,
    /// Host name or IP address of the federation server.
    pub hostname: String,
    /// TCP port of the federation server.
    pub port: u16,
    /// Path prefix of the federation endpoint, leading slash included.
    pub path: String,
    /// Default domain used to qualify bare usernames, when known.
    pub domain: Option<String>,
}

impl Default for FederationConfig {
    fn default() -> Self {
        Self {
            secure: false,
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT,
            path: DEFAULT_FEDERATION_PATH.to_string(),
            domain: None,
        }
    }
}

impl FederationConfig {
    /// Attaches a default domain for qualifying bare usernames.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Builds a config from a parsed federation server URL.
    ///
    /// Missing pieces fall back to the defaults: an absent host becomes
    /// [`DEFAULT_HOSTNAME`] and an absent port becomes the scheme's
    /// well-known port, or [`DEFAULT_PORT`] for schemes without one.
    pub fn from_federation_url(url: &Url, domain: Option<String>) -> Self {
        Self {
            secure: url.scheme() == "https",
            hostname: url.host_str().unwrap_or(DEFAULT_HOSTNAME).to_string(),
            port: url.port_or_known_default().unwrap_or(DEFAULT_PORT),
            path: url.path().to_string(),
            domain,
        }
    }

    /// Scheme implied by the `secure` flag.
    pub fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }

    /// Full endpoint URL this config points at.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.scheme(),
            self.hostname,
            self.port,
            self.path
        )
    }
}
