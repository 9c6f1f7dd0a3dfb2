//! Error handling for the Kitchen Inventory gateway
//!
//! Provides consistent error responses in English and Indonesian

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Token expired")]
    TokenExpired,

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_id: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // External service errors
    #[error("Upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Prediction service unavailable")]
    PredictionServiceUnavailable,

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        match shared::first_field_error(&errors) {
            Some(first) => AppError::Validation {
                message: format!("Invalid value for {}", first.field),
                field: first.field,
                message_id: first.message,
            },
            None => AppError::ValidationError(errors.to_string()),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorDetail {
    fn new(code: &str, message_en: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message_en: message_en.into(),
            message_id: message_id.into(),
            field: None,
        }
    }
}

/// Status forwarded to the browser for an upstream failure.
///
/// Client errors keep their status so forms can react; server errors become
/// 502 because the gateway itself is healthy.
fn upstream_status(status: u16) -> StatusCode {
    match StatusCode::from_u16(status) {
        Ok(code) if code.is_client_error() => code,
        _ => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail::new("UNAUTHORIZED", message.clone(), "Tidak memiliki akses"),
            ),
            AppError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail::new("TOKEN_EXPIRED", "Token has expired", "Sesi telah berakhir, silakan masuk kembali"),
            ),
            AppError::Validation { field, message, message_id } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    field: Some(field.clone()),
                    ..ErrorDetail::new("VALIDATION_ERROR", message.clone(), message_id.clone())
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("VALIDATION_ERROR", msg.clone(), format!("Data tidak valid: {}", msg)),
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail::new(
                    "NOT_FOUND",
                    format!("{} not found", resource),
                    format!("{} tidak ditemukan", resource),
                ),
            ),
            AppError::Upstream { status, message } => (
                upstream_status(*status),
                ErrorDetail::new(
                    "UPSTREAM_ERROR",
                    message.clone(),
                    format!("Permintaan ke server gagal: {}", message),
                ),
            ),
            AppError::ExternalService(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail::new(
                    "EXTERNAL_SERVICE_ERROR",
                    format!("External service error: {}", msg),
                    format!("Terjadi kesalahan pada layanan eksternal: {}", msg),
                ),
            ),
            AppError::PredictionServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail::new(
                    "PREDICTION_SERVICE_UNAVAILABLE",
                    "Prediction service is temporarily unavailable",
                    "Layanan prediksi sedang tidak tersedia",
                ),
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new(
                    "CONFIGURATION_ERROR",
                    format!("Configuration error: {}", msg),
                    format!("Kesalahan konfigurasi: {}", msg),
                ),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("INTERNAL_ERROR", msg.clone(), "Terjadi kesalahan pada server"),
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new(
                    "INTERNAL_ERROR",
                    "An internal server error occurred",
                    "Terjadi kesalahan pada server",
                ),
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_mapping() {
        assert_eq!(upstream_status(404), StatusCode::NOT_FOUND);
        assert_eq!(upstream_status(422), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(upstream_status(500), StatusCode::BAD_GATEWAY);
        assert_eq!(upstream_status(503), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_validation_response_status() {
        let response = AppError::Validation {
            field: "email".into(),
            message: "Invalid value for email".into(),
            message_id: "Email tidak valid.".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_from_validation_errors() {
        use validator::Validate;

        let input = shared::LoginInput {
            email: "salah".into(),
            password: "rahasia123".into(),
        };
        let err = AppError::from(input.validate().unwrap_err());
        match err {
            AppError::Validation { field, message_id, .. } => {
                assert_eq!(field, "email");
                assert_eq!(message_id, "Email tidak valid.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
