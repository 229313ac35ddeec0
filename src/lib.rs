//! # Edge Redirector
//!
//! Short-link redirector. `GET /r/{hash}` is answered with a `302 Found`
//! whose destination comes from a remote lookup service.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Short hash, lookup endpoint, policy and the lookup trait
//! - **Application Layer** ([`application`]) - Policy-driven redirect resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` lookup client
//! - **API Layer** ([`api`]) - Handlers, DTOs and tracing middleware
//!
//! ## Redirect Policies
//!
//! - **probe** - ask the lookup service, follow its redirect, and send the
//!   client to the final URL; 404 if it does not redirect, 500 if it fails
//! - **blind** - send the client to the lookup service directly, never fails locally
//!
//! ## Quick Start
//!
//! ```bash
//! export LOOKUP_BASE_URL="http://161.97.83.44:5001"
//! export REDIRECT_POLICY="probe"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RedirectService;
    pub use crate::domain::entities::{LookupEndpoint, RedirectPolicy, ShortHash};
    pub use crate::domain::{LookupError, LookupService, Resolution};
    pub use crate::error::AppError;
    pub use crate::infrastructure::lookup::HttpLookupService;
    pub use crate::state::AppState;
}
