//! Unified error codes for the canteen service
//!
//! - [`ErrorCode`]: Standardized numeric codes carried in every API response
//! - HTTP status mapping lives in [`http`]
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Order errors
//! - 9xxx: System errors

pub mod codes;
pub mod http;

pub use codes::{ErrorCode, InvalidErrorCode};
