//! Error handling for the Inventory Ledger Platform
//!
//! Provides consistent structured error responses

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
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    // No-op outcome of an adjustment where actual == system. Not a fault
    // at the ledger layer; surfaced as 400 to match the API contract.
    #[error("No adjustment needed")]
    NoAdjustmentNeeded,

    #[error("Resource not found: {0}")]
    NotFound(String),

    // The underlying store aborted the atomic scope (serialization
    // failure or deadlock). No partial writes are visible; the caller
    // may retry the whole operation.
    #[error("Transaction conflict, retry the operation")]
    TransactionConflict,

    // Database errors
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // SQLSTATE 40001 = serialization_failure, 40P01 = deadlock_detected.
        // Both mean the atomic scope rolled back cleanly and can be retried.
        if let sqlx::Error::Database(ref db_err) = err {
            if let Some(code) = db_err.code() {
                if code == "40001" || code == "40P01" {
                    return AppError::TransactionConflict;
                }
            }
        }
        AppError::Database(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Surface the first failing field; the client fixes one at a time.
        for (field, field_errors) in errors.field_errors() {
            if let Some(error) = field_errors.first() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                return AppError::Validation {
                    field: field.to_string(),
                    message,
                };
            }
        }
        AppError::Validation {
            field: "input".to_string(),
            message: "Invalid input".to_string(),
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
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "TOKEN_EXPIRED".to_string(),
                    message: "Token has expired".to_string(),
                    field: None,
                },
            ),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "INVALID_TOKEN".to_string(),
                    message: "Invalid token".to_string(),
                    field: None,
                },
            ),
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NoAdjustmentNeeded => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "NO_ADJUSTMENT_NEEDED".to_string(),
                    message: "No adjustment needed (actual quantity equals system quantity)"
                        .to_string(),
                    field: None,
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::TransactionConflict => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "TRANSACTION_CONFLICT".to_string(),
                    message: "The operation conflicted with a concurrent commit and was \
                              rolled back; retry the whole operation"
                        .to_string(),
                    field: None,
                },
            ),
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "DATABASE_ERROR".to_string(),
                    message: "A database error occurred".to_string(),
                    field: None,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
