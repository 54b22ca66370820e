//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A snapshot file could not be read.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A snapshot file is not valid JSON for the expected shape.
    #[error("Malformed snapshot {path}: {source}")]
    Snapshot {
        /// Path that failed.
        path: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78,
            Self::Io { .. } => 74,
            Self::Snapshot { .. } | Self::Validation(_) => 65,
        }
    }

    /// Returns a stable error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io { .. } => "IO_ERROR",
            Self::Snapshot { .. } => "MALFORMED_SNAPSHOT",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}
