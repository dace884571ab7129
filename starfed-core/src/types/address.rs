//! Stellar address rules.
//!
//! A Stellar address is a string of the form `name*domain`. These helpers
//! implement the two rules the resolution flow needs: whether an address
//! already carries a domain, and which domain to discover against. Queries
//! always send the caller's original string verbatim, so nothing here
//! rewrites a qualified address.

use crate::constants::ADDRESS_SEPARATOR;

/// Returns true when the address carries an explicit domain separator.
///
/// A qualified address is sent to the federation server as-is; a bare
/// username must first be completed with a client's bound default domain.
pub fn is_qualified(address: &str) -> bool {
    address.contains(ADDRESS_SEPARATOR)
}

/// Returns the domain segment of a `name*domain` address, if present and
/// non-empty.
///
/// The domain is the second `*`-separated segment; any further segments are
/// ignored here (the full original string still goes out verbatim in the
/// query itself).
pub fn domain_of(address: &str) -> Option<&str> {
    let mut parts = address.split(ADDRESS_SEPARATOR);
    parts.next();
    match parts.next() {
        Some(domain) if !domain.is_empty() => Some(domain),
        _ => None,
    }
}

/// Joins a bare username with a domain into a full Stellar address.
pub fn qualify(name: &str, domain: &str) -> String {
    format!("{name}{ADDRESS_SEPARATOR}{domain}")
}
