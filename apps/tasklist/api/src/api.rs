//! API routes
//!
//! Nested under /api by axum_helpers::create_router.

use axum::Router;
use domain_tasklist::{InMemoryTaskRepository, SequentialIdRegister, TaskManager, handlers};
use std::sync::Arc;

use crate::config::Config;

/// Build the task list routes over a fresh in-memory repository
pub fn routes(config: &Config) -> Router {
    let register = SequentialIdRegister::from_config(&config.registers);
    let repository = InMemoryTaskRepository::with_register(Arc::new(register));

    handlers::router(TaskManager::json(repository))
}

/// The complete application: docs, API, health, fallback
pub fn app(config: &Config) -> Router {
    axum_helpers::create_router::<crate::openapi::ApiDoc>(routes(config))
        .merge(axum_helpers::health_router(config.app))
}
