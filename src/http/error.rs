//! HTTP error handling and response types.

use crate::utils::error::{ErrorCategory, OracleError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Wraps a pipeline error so handlers can return it with `?`.
#[derive(Debug)]
pub struct AppError(pub OracleError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self.0.category() {
            ErrorCategory::Input => StatusCode::BAD_REQUEST,
            ErrorCategory::Dependency => StatusCode::BAD_GATEWAY,
            ErrorCategory::Configuration | ErrorCategory::System => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match &self.0 {
            OracleError::InvalidTimezone { .. } => "INVALID_TIMEZONE",
            OracleError::InvalidTime { .. } => "INVALID_TIME",
            OracleError::InvalidCoordinate { .. } => "INVALID_COORDINATE",
            OracleError::EphemerisFailure { .. } => "EPHEMERIS_FAILURE",
            OracleError::CatalogError { .. } => "CATALOG_ERROR",
            OracleError::ConfigError { .. }
            | OracleError::ConfigValidationError { .. }
            | OracleError::InvalidConfigValueError { .. }
            | OracleError::MissingConfigError { .. } => "CONFIG_ERROR",
            OracleError::IoError(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("❌ Request failed: {}", self.0);
        } else {
            tracing::warn!("⚠️ Rejected request: {}", self.0);
        }

        let body = ApiError::new(self.code(), self.0.user_friendly_message());
        (status, Json(body)).into_response()
    }
}

impl From<OracleError> for AppError {
    fn from(err: OracleError) -> Self {
        AppError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let input = AppError(OracleError::InvalidTimezone {
            name: "Mars/Olympus".to_string(),
        });
        assert_eq!(input.status(), StatusCode::BAD_REQUEST);
        assert_eq!(input.code(), "INVALID_TIMEZONE");

        let dependency = AppError(OracleError::EphemerisFailure {
            status: -1,
            message: "timeout".to_string(),
        });
        assert_eq!(dependency.status(), StatusCode::BAD_GATEWAY);

        let system = AppError(OracleError::CatalogError {
            message: "empty".to_string(),
        });
        assert_eq!(system.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_io_error_is_internal() {
        let err = AppError(OracleError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "chiron.toml",
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }
}
