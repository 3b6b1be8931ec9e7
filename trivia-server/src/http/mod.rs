//! HTTP server layer
//!
//! Axum server with:
//! - Open CORS, with allow-headers/allow-methods on every response
//! - Request tracing
//! - Graceful shutdown
//! - Uniform JSON error bodies

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
