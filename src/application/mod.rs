//! Application layer services implementing the redirect logic.
//!
//! Services consume domain traits and give HTTP handlers a small API that
//! knows nothing about `reqwest` or axum.
//!
//! # Available Services
//!
//! - [`services::redirect_service::RedirectService`] - Policy-driven hash resolution

pub mod services;
