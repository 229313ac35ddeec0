//! Lookup service client.
//!
//! Provides [`HttpLookupService`], the production implementation of
//! [`crate::domain::LookupService`].

mod http_lookup;

pub use http_lookup::HttpLookupService;
