pub mod handlers;

use serde::Serialize;
use utoipa::ToSchema;

/// JSON body returned by the fallback handlers.
///
/// Business failures of the task list are plain-text bodies produced by the
/// domain; this shape is only used for routing-level errors.
///
/// ```json
/// {
///   "error": "NotFound",
///   "message": "The requested resource was not found"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
