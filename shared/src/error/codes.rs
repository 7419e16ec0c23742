//! Error codes shared between the server and its clients
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Order errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as its `u16` value so non-Rust clients can match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// Staff key missing or wrong
    InvalidStaffKey = 1008,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Selected menu item does not exist
    InvalidMenuItem = 4010,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::RequiredField => "Fill all fields",
            ErrorCode::InvalidStaffKey => "Invalid staff key",
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::InvalidMenuItem => "Invalid item selected",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            7 => Ok(ErrorCode::RequiredField),
            1008 => Ok(ErrorCode::InvalidStaffKey),
            4001 => Ok(ErrorCode::OrderNotFound),
            4010 => Ok(ErrorCode::InvalidMenuItem),
            9002 => Ok(ErrorCode::DatabaseError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::OrderNotFound).unwrap();
        assert_eq!(json, "4001");

        let json = serde_json::to_string(&ErrorCode::RequiredField).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("1008").unwrap();
        assert_eq!(code, ErrorCode::InvalidStaffKey);

        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
    }

    #[test]
    fn test_try_from_covers_every_variant() {
        for code in [
            ErrorCode::RequiredField,
            ErrorCode::InvalidStaffKey,
            ErrorCode::OrderNotFound,
            ErrorCode::InvalidMenuItem,
            ErrorCode::DatabaseError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_form_messages() {
        assert_eq!(ErrorCode::RequiredField.message(), "Fill all fields");
        assert_eq!(ErrorCode::InvalidMenuItem.message(), "Invalid item selected");
    }
}
