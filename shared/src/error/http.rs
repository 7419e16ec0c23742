//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::OrderNotFound => StatusCode::NOT_FOUND,

            // 401 Unauthorized
            Self::InvalidStaffKey => StatusCode::UNAUTHORIZED,

            // 400 Bad Request
            Self::RequiredField | Self::InvalidMenuItem => StatusCode::BAD_REQUEST,

            // 500 Internal Server Error
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
