//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`lookup`] - HTTP client for the remote lookup service

pub mod lookup;
