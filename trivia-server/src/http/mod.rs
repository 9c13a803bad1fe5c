//! HTTP server layer
//!
//! Axum server with:
//! - CORS for all origins
//! - Request tracing
//! - Graceful shutdown
//! - JSON error envelopes for 400/404/405/422

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod test_support;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
