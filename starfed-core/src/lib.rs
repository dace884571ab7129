//! # Starfed Core
//!
//! Core types, errors, and traits for Stellar federation resolution.
//!
//! This crate provides the foundational building blocks used by the other
//! starfed crates:
//!
//! - **Types**: federation addresses, typed queries, and the pass-through
//!   federation record
//! - **Errors**: the resolution failure taxonomy
//! - **Constants**: protocol literals and endpoint defaults
//! - **Traits**: the injectable HTTP transport seam
//!
//! ## Example
//!
//! ```rust
//! use starfed_core::{FederationQuery, QueryKind};
//!
//! let query = FederationQuery::name("bob*stellar.org");
//! assert_eq!(query.kind, QueryKind::Name);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{FederationError, Result};
pub use traits::*;
pub use types::*;
