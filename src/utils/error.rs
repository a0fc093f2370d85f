use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("City data error: {message}")]
    DataError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PuzzleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PuzzleError::IoError(_) => ErrorCategory::Io,
            PuzzleError::TomlError(_)
            | PuzzleError::ConfigError { .. }
            | PuzzleError::InvalidConfigValueError { .. }
            | PuzzleError::MissingConfigError { .. } => ErrorCategory::Config,
            PuzzleError::DataError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // The city file is the whole input; not being able to read it is fatal.
            PuzzleError::IoError(_) => ErrorSeverity::Critical,
            PuzzleError::TomlError(_)
            | PuzzleError::ConfigError { .. }
            | PuzzleError::InvalidConfigValueError { .. }
            | PuzzleError::MissingConfigError { .. } => ErrorSeverity::High,
            PuzzleError::DataError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PuzzleError::IoError(_) => {
                "Check that the cities file exists and is readable (see --cities-file)".to_string()
            }
            PuzzleError::TomlError(_) => {
                "Check the TOML syntax of the settings file passed via --config".to_string()
            }
            PuzzleError::ConfigError { .. } => "Review the provided configuration".to_string(),
            PuzzleError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and try again", field)
            }
            PuzzleError::MissingConfigError { field } => {
                format!("Add the missing '{}' setting", field)
            }
            PuzzleError::DataError { .. } => {
                "Check the puzzle input for stray characters".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PuzzleError::IoError(e) => format!("Could not read a required file: {}", e),
            PuzzleError::TomlError(e) => format!("The settings file is not valid TOML: {}", e),
            PuzzleError::ConfigError { message } => format!("Configuration problem: {}", message),
            PuzzleError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' cannot be '{}': {}", field, value, reason),
            PuzzleError::MissingConfigError { field } => {
                format!("The setting '{}' is required but missing", field)
            }
            PuzzleError::DataError { message } => format!("Bad puzzle data: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
