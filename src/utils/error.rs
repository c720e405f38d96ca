use thiserror::Error;

#[derive(Error, Debug)]
pub enum GaugeError {
    #[error("Ambiguous height {value}: below {relative_threshold} reads as gauge-relative, above {absolute_threshold} as above sea level")]
    AmbiguousInputError {
        value: f64,
        relative_threshold: f64,
        absolute_threshold: f64,
    },

    #[error("Height {canonical:.3} is outside the reservoir limits [{min}, {max}]")]
    OutOfRangeError { canonical: f64, min: f64, max: f64 },

    #[error("Malformed stage table: {message}")]
    TableError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Data,
    System,
}

impl GaugeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // User input errors: the caller re-prompts and tries again.
            Self::AmbiguousInputError { .. } | Self::OutOfRangeError { .. } => {
                ErrorSeverity::Medium
            }
            // Startup errors: refuse to serve any query.
            Self::TableError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::Critical,
            Self::CsvError(_) | Self::IoError(_) | Self::SerializationError(_) => {
                ErrorSeverity::High
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AmbiguousInputError { .. } | Self::OutOfRangeError { .. } => {
                ErrorCategory::Input
            }
            Self::TableError { .. } => ErrorCategory::Data,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::CsvError(_) | Self::IoError(_) | Self::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::AmbiguousInputError { value, .. } => format!(
                "The height {} cannot be classified as gauge-relative or absolute",
                value
            ),
            Self::OutOfRangeError {
                canonical,
                min,
                max,
            } => format!(
                "The computed height {:.3} m must be within {}-{}",
                canonical, min, max
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::AmbiguousInputError {
                relative_threshold,
                absolute_threshold,
                ..
            } => format!(
                "Enter a height below {} (gauge-relative) or above {} (above sea level)",
                relative_threshold, absolute_threshold
            ),
            Self::OutOfRangeError { min, max, .. } => format!(
                "Enter a height that lands between {} and {} in the table's frame",
                min, max
            ),
            Self::TableError { .. } => {
                "Fix the stage table in the site configuration before serving queries".to_string()
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Review the site configuration file".to_string()
            }
            Self::CsvError(_) => {
                "Check the table CSV file (height,volume columns)".to_string()
            }
            Self::IoError(_) => {
                "Check that the configuration files exist and are readable".to_string()
            }
            Self::SerializationError(_) => "Check the output format settings".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GaugeError>;
