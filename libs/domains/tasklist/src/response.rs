use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::error::Error;

use crate::error::TaskListResult;

/// Outcome of a task manager operation, carrying the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResponse {
    Success(String),
    Failure(String),
}

impl CommandResponse {
    /// `Operation succeeded: {content}.`, or `Operation succeeded.` for blank content
    pub fn success(content: impl AsRef<str>) -> Self {
        let content = content.as_ref();
        if content.trim().is_empty() {
            Self::Success("Operation succeeded.".to_string())
        } else {
            Self::Success(format!("Operation succeeded: {content}."))
        }
    }

    /// Success whose message is `content` unchanged
    pub fn verbatim(content: impl Into<String>) -> Self {
        Self::Success(content.into())
    }

    /// `Operation failed: {reason}.`
    pub fn failure(reason: impl AsRef<str>) -> Self {
        Self::Failure(format!(
            "Operation failed: {}.",
            strip_period(reason.as_ref())
        ))
    }

    /// Failure described by the innermost cause of `error`
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        let mut innermost = error;
        while let Some(source) = innermost.source() {
            innermost = source;
        }
        Self::failure(innermost.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }

    pub fn into_message(self) -> String {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }
}

fn strip_period(text: &str) -> &str {
    text.strip_suffix('.').unwrap_or(text)
}

impl From<TaskListResult<String>> for CommandResponse {
    fn from(result: TaskListResult<String>) -> Self {
        match result {
            Ok(content) => Self::success(content),
            Err(error) => Self::from_error(&error),
        }
    }
}

impl IntoResponse for CommandResponse {
    fn into_response(self) -> Response {
        let status = if self.is_success() {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        };
        (status, self.into_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskListError;

    #[test]
    fn test_success_wraps_content() {
        let response = CommandResponse::success("The project with name \"P\" was created");

        assert!(response.is_success());
        assert_eq!(
            response.message(),
            "Operation succeeded: The project with name \"P\" was created."
        );
    }

    #[test]
    fn test_blank_success() {
        assert_eq!(CommandResponse::success("").message(), "Operation succeeded.");
        assert_eq!(CommandResponse::success("  ").message(), "Operation succeeded.");
    }

    #[test]
    fn test_verbatim_is_untouched() {
        let response = CommandResponse::verbatim("Home:\n\n");
        assert_eq!(response.into_message(), "Home:\n\n");
    }

    #[test]
    fn test_failure_strips_one_trailing_period() {
        assert_eq!(
            CommandResponse::failure("Bad input.").message(),
            "Operation failed: Bad input."
        );
        assert_eq!(
            CommandResponse::failure("Wait..").message(),
            "Operation failed: Wait.."
        );
        assert!(CommandResponse::failure("x").is_failure());
    }

    #[test]
    fn test_from_error_uses_innermost_cause() {
        let json_error = serde_json::from_str::<u64>("{").unwrap_err();
        let inner = json_error.to_string();
        let error = TaskListError::from(json_error);

        let response = CommandResponse::from_error(&error);
        assert_eq!(
            response.message(),
            format!("Operation failed: {}.", strip_period(&inner))
        );
    }

    #[test]
    fn test_from_result() {
        let ok: CommandResponse = Ok::<_, TaskListError>("done".to_string()).into();
        let err: CommandResponse = Err::<String, _>(TaskListError::TaskNotFound(999)).into();

        assert_eq!(ok.message(), "Operation succeeded: done.");
        assert_eq!(
            err.message(),
            "Operation failed: Could not find a task with an ID of 999."
        );
    }

    #[test]
    fn test_into_response_status() {
        assert_eq!(
            CommandResponse::success("ok").into_response().status(),
            StatusCode::OK
        );
        assert_eq!(
            CommandResponse::failure("no").into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
