//! API Response types
//!
//! Envelope used for every JSON error body. Success bodies keep their own
//! shape (`{"orders": [...]}`, the menu array, the health report).

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

/// Unified API response structure
///
/// ```json
/// {
///     "code": 4001,
///     "message": "Order not found"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create an error response
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_skips_data() {
        let resp = ApiResponse::<()>::error(ErrorCode::OrderNotFound, "Order 20240115-0007 not found");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], 4001);
        assert_eq!(json["message"], "Order 20240115-0007 not found");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_error_body_round_trips_code() {
        let json = r#"{"code":1008,"message":"Invalid staff key"}"#;
        let resp: ApiResponse<()> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.code, ErrorCode::InvalidStaffKey);
        assert!(resp.data.is_none());
    }
}
