use serde_json::{json, Value};
use thiserror::Error;
use warp::http::StatusCode;
use crate::enums::ai_provider_error::AiProviderError;

pub const MISSING_TEXT_MESSAGE: &str = "Missing 'text' field in request body";
pub const EMPTY_TEXT_MESSAGE: &str = "Text cannot be empty";
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse analysis response";

#[derive(Debug, Error)]
pub enum AnalyzerError {
    // Request validation errors
    #[error("{}", MISSING_TEXT_MESSAGE)]
    MissingText,
    #[error("{}", EMPTY_TEXT_MESSAGE)]
    EmptyText,

    // Completion service errors
    #[error(transparent)]
    Provider(#[from] AiProviderError),

    // Model reply could not be read as JSON
    #[error("{}", PARSE_FAILURE_MESSAGE)]
    ParseError {
        raw_response: String,
        reason: String,
    },

    // Configuration errors
    #[error("Configuration Error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl AnalyzerError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(raw_response: String, reason: &str) -> Self {
        Self::ParseError {
            raw_response,
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Short label used in log lines.
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingText | Self::EmptyText => "validation",
            Self::Provider(_) => "provider",
            Self::ParseError { .. } => "parse",
            Self::ConfigurationError { .. } | Self::ConfigurationFileError { .. } => "configuration",
            Self::SystemError { .. } => "system",
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingText | Self::EmptyText)
    }

    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// JSON body returned to HTTP callers. Parse failures keep the
    /// fence-stripped model output so the failure can be reproduced.
    pub fn to_response_body(&self) -> Value {
        match self {
            Self::ParseError { raw_response, .. } => json!({
                "error": PARSE_FAILURE_MESSAGE,
                "raw_response": raw_response,
            }),
            other => json!({ "error": other.to_string() }),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::ParseError { raw_response, reason } => {
                format!("{}: {}\nRaw response:\n{}", PARSE_FAILURE_MESSAGE, reason, raw_response)
            }
            Self::Provider(error) => {
                format!("{}\n💡 Check your API key and internet connection and try again", error)
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for analyzer operations
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

impl From<std::io::Error> for AnalyzerError {
    fn from(error: std::io::Error) -> Self {
        AnalyzerError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}
