//! Domain layer: request-scoped values and the lookup contract.
//!
//! # Architecture
//!
//! - [`entities`] - Short hash, lookup endpoint and redirect policy
//! - [`lookup_service`] - Trait the redirect service resolves hashes through
//!
//! The domain layer has no dependency on HTTP frameworks or clients; the
//! `reqwest` implementation lives in [`crate::infrastructure::lookup`].

pub mod entities;
pub mod lookup_service;

pub use lookup_service::{LookupError, LookupService, Resolution};

#[cfg(test)]
pub use lookup_service::MockLookupService;
