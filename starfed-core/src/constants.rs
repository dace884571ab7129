//! Protocol constants for Stellar federation resolution.
//!
//! The literals here come from the federation protocol itself: the address
//! separator, the well-known discovery location, and the endpoint defaults a
//! client falls back to when constructed without configuration.

// ═══════════════════════════════════════════════════════════════════════════════
// ADDRESS FORMAT
// ═══════════════════════════════════════════════════════════════════════════════

/// Separator between the name and domain parts of a Stellar address
/// (`bob*stellar.org`).
pub const ADDRESS_SEPARATOR: char = '*';

// ═══════════════════════════════════════════════════════════════════════════════
// WELL-KNOWN DISCOVERY
// ═══════════════════════════════════════════════════════════════════════════════

/// Path of the well-known configuration document, relative to a domain's
/// `www.` host.
pub const WELL_KNOWN_PATH: &str = "/.well-known/stellar.toml";

/// Host prefix prepended to the domain when fetching the well-known document.
pub const WELL_KNOWN_HOST_PREFIX: &str = "www.";

/// Key inside the well-known document that advertises the federation
/// endpoint URL. The only key this client reads.
pub const FEDERATION_SERVER_KEY: &str = "FEDERATION_SERVER";

// ═══════════════════════════════════════════════════════════════════════════════
// ENDPOINT DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Hostname used when none is configured.
pub const DEFAULT_HOSTNAME: &str = "localhost";

/// Port used when none is configured. The valid protocol range is 1–65535.
pub const DEFAULT_PORT: u16 = 80;

/// Endpoint path used when none is configured.
pub const DEFAULT_FEDERATION_PATH: &str = "/federation";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_location() {
        assert_eq!(
            format!("https://{}example.com{}", WELL_KNOWN_HOST_PREFIX, WELL_KNOWN_PATH),
            "https://www.example.com/.well-known/stellar.toml"
        );
    }

    #[test]
    fn test_endpoint_defaults() {
        assert_eq!(DEFAULT_HOSTNAME, "localhost");
        assert_eq!(DEFAULT_PORT, 80);
        assert_eq!(DEFAULT_FEDERATION_PATH, "/federation");
    }
}
