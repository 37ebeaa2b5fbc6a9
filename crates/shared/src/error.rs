use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EMPTY_USERNAME_MESSAGE: &str = "Please enter a GitHub username";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a GitHub username")]
    EmptyUsername,
    #[error("unknown resume layout '{0}' (expected 'classic' or 'modern')")]
    UnknownLayout(String),
}

/// Error body returned by the resume API on non-2xx responses.
///
/// The backend sends `{"error": "...", "message": "..."}` but either key may
/// be missing, so both are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: None,
            message: Some(message.into()),
        }
    }

    /// Non-empty `message` field, if any.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}
