//! Shared types for the canteen ordering service
//!
//! Row types, menu entries, error codes and the response envelope used by
//! the server and by anything that talks to its JSON API.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use error::ErrorCode;
pub use models::{MenuItem, Order};
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
