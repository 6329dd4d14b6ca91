use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Stripe API returned {status}: {message}")]
    HttpStatusError { status: u16, message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cannot read config file {message}")]
    ConfigError { message: String },

    #[error("{field} environment variable not set")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Output,
}

impl ExportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExportError::ConfigError { .. }
            | ExportError::MissingConfigError { .. }
            | ExportError::InvalidConfigValueError { .. }
            | ExportError::ConfigParseError { .. } => ErrorCategory::Configuration,
            ExportError::ApiError(_)
            | ExportError::HttpStatusError { .. }
            | ExportError::SerializationError(_) => ErrorCategory::Network,
            ExportError::CsvError(_) | ExportError::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration error: {}", self),
            _ => format!("Error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ExportError::MissingConfigError { field } => {
                format!("Please set your Stripe API key\nexport {}='sk_test_...'", field)
            }
            ExportError::InvalidConfigValueError { field, .. } => {
                format!("Check the value passed for {}", field)
            }
            ExportError::ConfigError { .. } | ExportError::ConfigParseError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            ExportError::HttpStatusError { status: 401, .. } => {
                "Check that the API key is a valid Stripe secret key".to_string()
            }
            ExportError::HttpStatusError { .. }
            | ExportError::ApiError(_)
            | ExportError::SerializationError(_) => {
                "Check network connectivity and the Stripe API status, then run the export again"
                    .to_string()
            }
            ExportError::CsvError(_) | ExportError::IoError(_) => {
                "Check that the output path is writable".to_string()
            }
        }
    }

    /// A missing credential exits 0 (2 with `strict`); every other error exits 1.
    pub fn exit_code(&self, strict: bool) -> i32 {
        match self {
            ExportError::MissingConfigError { .. } if strict => 2,
            ExportError::MissingConfigError { .. } => 0,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
