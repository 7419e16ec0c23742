//! Data models
//!
//! Shared between canteen-server and its API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod menu;
pub mod order;

// Re-exports
pub use menu::*;
pub use order::*;
