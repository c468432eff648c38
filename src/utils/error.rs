use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookFinderError {
    #[error("No search keywords were entered")]
    EmptyInput,

    #[error("No network connection available (could not reach {host})")]
    NetworkUnavailable { host: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Response parsing error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Background search task failed: {message}")]
    TaskError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Api,
    Parse,
    Output,
    Configuration,
    Runtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BookFinderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BookFinderError::EmptyInput => ErrorCategory::Input,
            BookFinderError::NetworkUnavailable { .. } => ErrorCategory::Network,
            BookFinderError::ApiError(_) | BookFinderError::HttpStatusError { .. } => {
                ErrorCategory::Api
            }
            BookFinderError::ParseError(_) => ErrorCategory::Parse,
            BookFinderError::IoError(_) | BookFinderError::CsvError(_) => ErrorCategory::Output,
            BookFinderError::ConfigError { .. }
            | BookFinderError::ConfigValidationError { .. }
            | BookFinderError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BookFinderError::TaskError { .. } => ErrorCategory::Runtime,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // fetch and parse failures degrade to an empty result set
            ErrorCategory::Api | ErrorCategory::Parse => ErrorSeverity::Low,
            ErrorCategory::Input | ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Output | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Runtime => ErrorSeverity::Critical,
        }
    }

    /// Short message meant for the person at the terminal, not for the log.
    pub fn user_friendly_message(&self) -> String {
        match self {
            BookFinderError::EmptyInput => "Please enter a search term".to_string(),
            BookFinderError::NetworkUnavailable { .. } => {
                "No network connection available".to_string()
            }
            BookFinderError::ApiError(e) if e.is_timeout() => {
                "The book search service took too long to respond".to_string()
            }
            BookFinderError::ApiError(_) | BookFinderError::HttpStatusError { .. } => {
                "The book search service could not be reached".to_string()
            }
            BookFinderError::ParseError(_) => {
                "The book search service returned an unexpected response".to_string()
            }
            BookFinderError::IoError(_) | BookFinderError::CsvError(_) => {
                "Failed to write search results".to_string()
            }
            BookFinderError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            BookFinderError::ConfigValidationError { field, message } => {
                format!("Invalid configuration in '{}': {}", field, message)
            }
            BookFinderError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for '{}': {}", field, reason)
            }
            BookFinderError::TaskError { .. } => "The search was interrupted".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Type one or more keywords, e.g. `bookfinder dune`",
            ErrorCategory::Network => "Check your network connection and try again",
            ErrorCategory::Api => "Try again later or check the --endpoint setting",
            ErrorCategory::Parse => "Check that --endpoint points at a Google Books compatible API",
            ErrorCategory::Output => "Check that stdout is writable",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::Runtime => "Run again with --verbose and report the log output",
        }
    }
}

pub type Result<T> = std::result::Result<T, BookFinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_fetch_conditions_are_distinct() {
        let empty = BookFinderError::EmptyInput;
        let offline = BookFinderError::NetworkUnavailable {
            host: "www.googleapis.com".to_string(),
        };

        assert_eq!(empty.category(), ErrorCategory::Input);
        assert_eq!(offline.category(), ErrorCategory::Network);
        assert_ne!(empty.user_friendly_message(), offline.user_friendly_message());
    }

    #[test]
    fn test_severity_ordering() {
        let status = BookFinderError::HttpStatusError {
            status: 503,
            url: "http://localhost/volumes".to_string(),
        };
        let config = BookFinderError::ConfigError {
            message: "bad".to_string(),
        };

        assert_eq!(status.severity(), ErrorSeverity::Low);
        assert!(config.severity() > status.severity());
        assert_eq!(
            BookFinderError::EmptyInput.severity(),
            ErrorSeverity::Medium
        );
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err: BookFinderError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.category(), ErrorCategory::Parse);
        assert!(err.to_string().starts_with("Response parsing error"));
    }
}
