use std::fmt;
use thiserror::Error;

/// Which identifier sequence an [`TaskListError::IdOverflow`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Project,
    Task,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdKind::Project => f.write_str("project"),
            IdKind::Task => f.write_str("task"),
        }
    }
}

/// Business and internal failures of the task list core.
///
/// The `Display` text of each variant is the user-facing failure reason;
/// [`CommandResponse`](crate::CommandResponse) wraps it into the final message.
#[derive(Debug, Error)]
pub enum TaskListError {
    #[error("Project with the same name already exists")]
    DuplicateName(String),

    #[error("Could not find a project with the name \"{0}\"")]
    ProjectNotFound(String),

    #[error("Could not find a task with an ID of {0}")]
    TaskNotFound(u64),

    #[error("Could not serialize the task list")]
    Serialization(#[from] serde_json::Error),

    #[error("The {0} identifier sequence is exhausted")]
    IdOverflow(IdKind),
}

pub type TaskListResult<T> = Result<T, TaskListError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_not_found_messages_quote_the_key() {
        assert_eq!(
            TaskListError::ProjectNotFound("Home".into()).to_string(),
            "Could not find a project with the name \"Home\""
        );
        assert_eq!(
            TaskListError::TaskNotFound(12).to_string(),
            "Could not find a task with an ID of 12"
        );
    }

    #[test]
    fn test_serialization_keeps_source() {
        let json_error = serde_json::from_str::<u64>("not json").unwrap_err();
        let error = TaskListError::from(json_error);

        assert!(error.source().is_some());
    }

    #[test]
    fn test_overflow_names_the_sequence() {
        assert_eq!(
            TaskListError::IdOverflow(IdKind::Task).to_string(),
            "The task identifier sequence is exhausted"
        );
    }
}
