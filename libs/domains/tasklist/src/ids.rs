//! Identifier registers for projects and tasks.
//!
//! Each sequence is independent and guarded by its own mutex, so concurrent
//! callers never receive the same value.

use core_config::{ConfigError, FromEnv, env_parse_or};
use std::sync::{Mutex, PoisonError};

use crate::error::{IdKind, TaskListError, TaskListResult};

/// Source of unique, strictly increasing identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait IdRegister: Send + Sync {
    /// Issue the next unused project identifier
    fn next_project_id(&self) -> TaskListResult<u64>;

    /// Issue the next unused task identifier
    fn next_task_id(&self) -> TaskListResult<u64>;
}

/// Register settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterConfig {
    /// First value issued by both sequences
    pub first_id: u64,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self { first_id: 1 }
    }
}

impl FromEnv for RegisterConfig {
    /// Reads `TASKLIST_FIRST_ID`, defaulting to 1.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            first_id: env_parse_or("TASKLIST_FIRST_ID", 1)?,
        })
    }
}

/// Two counters behind separate locks, starting at a configurable value.
#[derive(Debug)]
pub struct SequentialIdRegister {
    first_id: u64,
    last_project_id: Mutex<Option<u64>>,
    last_task_id: Mutex<Option<u64>>,
}

impl SequentialIdRegister {
    pub fn new() -> Self {
        Self::starting_at(RegisterConfig::default().first_id)
    }

    pub fn starting_at(first_id: u64) -> Self {
        Self {
            first_id,
            last_project_id: Mutex::new(None),
            last_task_id: Mutex::new(None),
        }
    }

    pub fn from_config(config: &RegisterConfig) -> Self {
        Self::starting_at(config.first_id)
    }

    fn issue(&self, counter: &Mutex<Option<u64>>, kind: IdKind) -> TaskListResult<u64> {
        // A panic while holding the lock cannot leave the counter half-written
        let mut last = counter.lock().unwrap_or_else(PoisonError::into_inner);

        let next = match *last {
            None => self.first_id,
            Some(previous) => previous
                .checked_add(1)
                .ok_or(TaskListError::IdOverflow(kind))?,
        };

        *last = Some(next);
        Ok(next)
    }
}

impl Default for SequentialIdRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl IdRegister for SequentialIdRegister {
    fn next_project_id(&self) -> TaskListResult<u64> {
        self.issue(&self.last_project_id, IdKind::Project)
    }

    fn next_task_id(&self) -> TaskListResult<u64> {
        self.issue(&self.last_task_id, IdKind::Task)
    }
}
