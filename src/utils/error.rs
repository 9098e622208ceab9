use thiserror::Error;

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Invalid timezone: {name}")]
    InvalidTimezone { name: String },

    #[error("Invalid time: {message}")]
    InvalidTime { message: String },

    #[error("Invalid coordinate '{field}' = {value}: {reason}")]
    InvalidCoordinate {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Ephemeris failure (status {status}): {message}")]
    EphemerisFailure { status: i32, message: String },

    #[error("Interpretation catalog error: {message}")]
    CatalogError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad birth data from the caller.
    Input,
    /// The ephemeris oracle could not answer.
    Dependency,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl OracleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OracleError::InvalidTimezone { .. }
            | OracleError::InvalidTime { .. }
            | OracleError::InvalidCoordinate { .. } => ErrorCategory::Input,
            OracleError::EphemerisFailure { .. } => ErrorCategory::Dependency,
            OracleError::ConfigError { .. }
            | OracleError::ConfigValidationError { .. }
            | OracleError::InvalidConfigValueError { .. }
            | OracleError::MissingConfigError { .. } => ErrorCategory::Configuration,
            OracleError::CatalogError { .. }
            | OracleError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Dependency => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OracleError::InvalidTimezone { .. } => {
                "Use an IANA zone name such as 'Asia/Kolkata' or 'Europe/London'"
            }
            OracleError::InvalidTime { .. } => {
                "Check the birth date and use an hour between 0 and 24 (exclusive)"
            }
            OracleError::InvalidCoordinate { .. } => {
                "Latitude must be within -90..90 and longitude within -180..180"
            }
            OracleError::EphemerisFailure { .. } => {
                "The ephemeris service may be unreachable or the date out of range; retry later"
            }
            OracleError::CatalogError { .. } => "The embedded interpretation data is corrupt; rebuild the binary",
            OracleError::IoError(_) => "Check file permissions and paths",
            OracleError::ConfigError { .. }
            | OracleError::ConfigValidationError { .. }
            | OracleError::InvalidConfigValueError { .. }
            | OracleError::MissingConfigError { .. } => "Review the configuration file and environment variables",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OracleError::InvalidTimezone { name } => format!("Unknown timezone '{}'", name),
            OracleError::InvalidTime { message } => format!("Invalid birth time: {}", message),
            OracleError::InvalidCoordinate { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            OracleError::EphemerisFailure { message, .. } => {
                format!("Could not compute the planetary position: {}", message)
            }
            other => other.to_string(),
        }
    }

    pub(crate) fn invalid_time(message: impl Into<String>) -> Self {
        OracleError::InvalidTime {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OracleError>;
