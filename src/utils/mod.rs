//! Request handling helpers.
//!
//! - [`extract_hash`] - Short hash extraction from the request path

pub mod extract_hash;
