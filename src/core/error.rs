use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the e-commerce helper
#[derive(Error, Debug)]
pub enum HelperError {
    /// AI provider API errors (OpenAI, Anthropic, etc.)
    #[error("API error: {0}")]
    Api(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// User input errors
    #[error("Input error: {0}")]
    Input(String),

    /// IO-related errors
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// The system prompt file could not be found
    #[error("System prompt not found: {}", .0.display())]
    PromptNotFound(PathBuf),

    /// Sales or stock backend errors
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(String),

    /// Unknown or unexpected errors
    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, HelperError>;

impl From<reqwest::Error> for HelperError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HelperError::Network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            HelperError::Network(format!("Connection failed: {}", err))
        } else if err.is_status() {
            HelperError::Api(format!("API returned error status: {}", err))
        } else {
            HelperError::Network(format!("Request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for HelperError {
    fn from(err: serde_json::Error) -> Self {
        HelperError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<serde_yml::Error> for HelperError {
    fn from(err: serde_yml::Error) -> Self {
        HelperError::Serialization(format!("YAML error: {}", err))
    }
}

impl From<String> for HelperError {
    fn from(err: String) -> Self {
        HelperError::Unknown(err)
    }
}

impl From<&str> for HelperError {
    fn from(err: &str) -> Self {
        HelperError::Unknown(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_not_found_names_the_path() {
        let err = HelperError::PromptNotFound(PathBuf::from("prompts/system_prompt.txt"));
        assert_eq!(
            err.to_string(),
            "System prompt not found: prompts/system_prompt.txt"
        );
    }

    #[test]
    fn io_errors_convert_through_question_mark() {
        fn read() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))?;
            Ok(())
        }

        assert!(matches!(read(), Err(HelperError::Io { .. })));
    }

    #[test]
    fn plain_strings_become_unknown() {
        let err: HelperError = "boom".into();
        assert!(matches!(err, HelperError::Unknown(ref msg) if msg == "boom"));
    }
}
