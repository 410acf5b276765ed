//! Axum-based HTTP server implementation for the relay.
//!
//! This module is responsible for setting up the HTTP server, configuring the
//! router and middleware, and dispatching incoming requests to the provider
//! adapters.
//!
//! # Components
//!
//! - `handlers`: The single relay handler (method check, body parse, routing).
//! - `middleware`: Cross-origin response headers and request ID tracking.
//! - `routes`: The router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use middleware::{ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
pub use routes::{create_router, AppState};
