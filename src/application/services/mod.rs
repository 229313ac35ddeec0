//! Application services.

pub mod redirect_service;

pub use redirect_service::RedirectService;
