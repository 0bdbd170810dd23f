//! HTTP plumbing shared by the TaskList binaries.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, health endpoint, graceful shutdown
//! - **[`errors`]**: JSON error body and fallback handlers
//!
//! Binaries build their API router, hand it to [`create_router`] (which adds
//! `/api` nesting, Swagger UI and the fallbacks), merge [`health_router`] and
//! serve the result with [`create_production_app`].

pub mod errors;
pub mod server;

pub use errors::ErrorResponse;
pub use server::{
    HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, shutdown_signal,
};
