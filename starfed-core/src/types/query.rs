//! Typed federation queries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lookup type accepted by a federation server.
///
/// The wire literals are fixed by the protocol: `name` for Stellar
/// addresses, `id` for account IDs, `txid` for transaction IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    /// Look up by Stellar address (`name*domain`).
    Name,
    /// Look up by account ID.
    Id,
    /// Look up by transaction ID.
    Txid,
}

impl QueryKind {
    /// Returns the wire literal sent as the `type` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            QueryKind::Name => "name",
            QueryKind::Id => "id",
            QueryKind::Txid => "txid",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One federation lookup: a kind and the value to look up.
///
/// Transient: built per call, never persisted. The value is sent exactly as
/// given; any shape validation is the remote server's responsibility.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederationQuery {
    /// Which lookup the server should perform.
    pub kind: QueryKind,
    /// The address, account ID, or transaction ID being looked up.
    pub value: String,
}

impl FederationQuery {
    /// Builds a lookup by Stellar address.
    pub fn name(value: impl Into<String>) -> Self {
        Self {
            kind: QueryKind::Name,
            value: value.into(),
        }
    }

    /// Builds a lookup by account ID.
    pub fn id(value: impl Into<String>) -> Self {
        Self {
            kind: QueryKind::Id,
            value: value.into(),
        }
    }

    /// Builds a lookup by transaction ID.
    pub fn txid(value: impl Into<String>) -> Self {
        Self {
            kind: QueryKind::Txid,
            value: value.into(),
        }
    }

    /// The `type` and `q` query parameters for this lookup.
    pub fn as_params(&self) -> [(&'static str, &str); 2] {
        [("type", self.kind.as_str()), ("q", &self.value)]
    }
}
