use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::actions::ActionError;
use crate::macros::MacroError;
use crate::moderation::PlatformError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Moderation platform error: {0}")]
    Platform(#[from] PlatformError),
}

impl From<ActionError> for AppError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::Macro(e) => AppError::from(e),
            ActionError::Platform(e) => AppError::Platform(e),
        }
    }
}

impl From<MacroError> for AppError {
    fn from(err: MacroError) -> Self {
        match err {
            MacroError::Store(e) => AppError::Store(e),
            MacroError::TemplateNotConfigured(_) => AppError::NotFound(err.to_string()),
            other => AppError::Validation(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Check if running in production mode (based on RUN_MODE env var)
fn is_production() -> bool {
    std::env::var("RUN_MODE")
        .map(|m| m == "production" || m == "prod")
        .unwrap_or(false)
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            AppError::Store(_) => (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE"),
            AppError::Platform(PlatformError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "TARGET_NOT_FOUND")
            }
            AppError::Platform(PlatformError::RateLimited) => {
                (StatusCode::TOO_MANY_REQUESTS, "PLATFORM_RATE_LIMITED")
            }
            AppError::Platform(_) => (StatusCode::BAD_GATEWAY, "PLATFORM_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let log_message = self.to_string();

        // Infrastructure failures are masked in production
        let client_message = match &self {
            AppError::Validation(_) | AppError::NotFound(_) => log_message.clone(),
            AppError::Platform(PlatformError::NotFound(_)) => log_message.clone(),
            AppError::Store(_) if is_production() => {
                "Service temporarily unavailable".to_string()
            }
            AppError::Platform(_) if is_production() => {
                "Moderation platform request failed".to_string()
            }
            AppError::Config(_) | AppError::Internal(_) if is_production() => {
                "Internal server error".to_string()
            }
            _ => log_message.clone(),
        };

        // Always log the detailed error server-side
        tracing::error!(
            code = %code,
            status = %status.as_u16(),
            message = %log_message,
            "API error"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: client_message,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_not_found_maps_to_404() {
        let err = AppError::Platform(PlatformError::NotFound("t3_abc".to_string()));
        assert_eq!(err.status_and_code(), (StatusCode::NOT_FOUND, "TARGET_NOT_FOUND"));
    }

    #[test]
    fn test_store_error_maps_to_503() {
        let err = AppError::Store(StoreError::Unavailable("down".to_string()));
        assert_eq!(
            err.status_and_code(),
            (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE")
        );
    }

    #[test]
    fn test_action_error_conversion() {
        let err: AppError = ActionError::Platform(PlatformError::Unauthorized).into();
        assert!(matches!(err, AppError::Platform(PlatformError::Unauthorized)));
        assert_eq!(err.status_and_code().0, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_macro_error_conversion() {
        use crate::macros::TemplateKind;

        let err: AppError = MacroError::TemplateNotConfigured(TemplateKind::Ban).into();
        assert_eq!(err.status_and_code().0, StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("ban macro has not been set"));

        let err: AppError = MacroError::ReservedName("mod".to_string()).into();
        assert_eq!(err.status_and_code().0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_action_store_failure_maps_to_503() {
        let err: AppError =
            ActionError::Macro(MacroError::Store(StoreError::Unavailable("down".into()))).into();
        assert_eq!(
            err.status_and_code(),
            (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE")
        );
    }
}
