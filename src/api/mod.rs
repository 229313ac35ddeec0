//! HTTP layer: handlers, response DTOs and middleware.
//!
//! # Modules
//!
//! - [`dto`] - JSON response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
