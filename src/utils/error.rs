use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Document parse error: {message}")]
    ParseError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Document,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl AgendaError {
    pub fn parse(message: impl Into<String>) -> Self {
        AgendaError::ParseError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AgendaError::IoError(_) => ErrorCategory::Io,
            AgendaError::ParseError { .. } => ErrorCategory::Document,
            AgendaError::ConfigError { .. }
            | AgendaError::ConfigValidationError { .. }
            | AgendaError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Document | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AgendaError::IoError(_) => "Check that the input file exists and the output directory is writable",
            AgendaError::ParseError { .. } => {
                "Make sure the agenda export is complete, well-formed XML (every tag closed)"
            }
            AgendaError::ConfigError { .. } => {
                "Check that the --config path points to a readable TOML file"
            }
            AgendaError::ConfigValidationError { .. } => {
                "Check the configuration file syntax and required sections"
            }
            AgendaError::InvalidConfigValueError { .. } => {
                "Correct the reported configuration value and run again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AgendaError::IoError(e) => format!("Could not read or write a file: {}", e),
            AgendaError::ParseError { message } => {
                format!("The input is not a valid agenda document: {}", message)
            }
            AgendaError::ConfigError { message } => format!("Configuration problem: {}", message),
            AgendaError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            AgendaError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not allowed for '{}': {}", value, field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AgendaError>;
