//! Unified error handling
//!
//! [`AppError`] is what every handler returns; it renders as an
//! [`ApiResponse`] envelope with an [`ErrorCode`].
//!
//! | Variant | Status | Code |
//! |---------|--------|------|
//! | Unauthorized | 401 | 1008 |
//! | NotFound | 404 | 4001 |
//! | Validation | 400 | 7 / 4010 |
//! | Database | 500 | 9002 |
//!
//! ```ignore
//! Err(AppError::not_found(format!("Order {number} not found")))
//! ```

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use shared::{ApiResponse, ErrorCode};
use tracing::error;

use crate::db::repository::RepoError;
use crate::orders::{OrderError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Client errors (4xx) ==========
    #[error("Authentication required")]
    /// Staff key missing or wrong (401)
    Unauthorized,

    #[error("Resource not found: {0}")]
    /// Unknown resource (404)
    NotFound(String),

    #[error("Validation failed: {message}")]
    /// Rejected input (400)
    Validation { code: ErrorCode, message: String },

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    /// Storage failure (500)
    Database(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Unauthorized => ErrorCode::InvalidStaffKey,
            AppError::NotFound(_) => ErrorCode::OrderNotFound,
            AppError::Validation { code, .. } => *code,
            AppError::Database(_) => ErrorCode::DatabaseError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let message = match &self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation { message, .. } => message.clone(),
            AppError::Unauthorized => code.message().to_string(),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                code.message().to_string()
            }
        };

        let body = Json(ApiResponse::<()>::error(code, message));
        (code.http_status(), body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) | RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(e) => e.into(),
            OrderError::NotFound(number) => AppError::not_found(format!("Order {number} not found")),
            OrderError::Unauthorized => AppError::Unauthorized,
            OrderError::Repo(e) => e.into(),
        }
    }
}
