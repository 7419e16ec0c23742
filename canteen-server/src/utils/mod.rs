//! Utilities - error types, logging, validation helpers
//!
//! - [`AppError`] - handler error type
//! - [`AppResult`] - handler result alias

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
