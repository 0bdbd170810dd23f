//! TaskList Domain
//!
//! In-memory projects and tasks with deadlines, shared by the console REPL
//! and the HTTP API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (the console controller sits at the same level)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ TaskManager │  ← Response messages, listings via a Renderer
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Atomic mutations and snapshots (trait + in-memory impl)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ IdRegister  │  ← Unique project and task identifiers
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasklist::{handlers, InMemoryTaskRepository, TaskManager};
//!
//! let repository = InMemoryTaskRepository::new();
//! let manager = TaskManager::json(repository);
//!
//! let router = handlers::router(manager);
//! ```

pub mod error;
pub mod handlers;
pub mod ids;
pub mod input;
pub mod models;
pub mod query;
pub mod render;
pub mod repository;
pub mod response;
pub mod service;

pub use error::{IdKind, TaskListError, TaskListResult};
pub use handlers::ApiDoc;
pub use ids::{IdRegister, RegisterConfig, SequentialIdRegister};
pub use input::InputError;
pub use models::{DeadlineView, NO_DEADLINE, Project, ProjectView, Snapshot, Task, TaskView};
pub use render::{ConsoleRenderer, JsonRenderer, Renderer};
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use response::CommandResponse;
pub use service::TaskManager;
