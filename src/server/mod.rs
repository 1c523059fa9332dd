//! Server module for the catalog HTTP API
//!
//! Exposes the read-only `/api/*` routes, health checks and the
//! `/public` static directory through a `ServerBuilder`.

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::{AppState, Clock};
