//! Domain types for federation resolution.
//!
//! - [`is_qualified`] / [`domain_of`] / [`qualify`]: the `name*domain`
//!   address rules
//! - [`FederationQuery`]: one typed lookup, built per call
//! - [`FederationRecord`]: the pass-through response payload

mod address;
mod query;
mod record;

pub use address::*;
pub use query::*;
pub use record::*;
