//! Core domain values of the redirector.
//!
//! All of them live for a single request at most; nothing here is stored.
//!
//! - [`ShortHash`] - Opaque token from the request path
//! - [`LookupEndpoint`] - Where hashes are resolved
//! - [`RedirectPolicy`] - Probe-then-redirect or blind redirect

pub mod lookup_endpoint;
pub mod redirect_policy;
pub mod short_hash;

pub use lookup_endpoint::LookupEndpoint;
pub use redirect_policy::{ParsePolicyError, RedirectPolicy};
pub use short_hash::ShortHash;
