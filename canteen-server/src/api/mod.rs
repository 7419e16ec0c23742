//! API routes
//!
//! | Path | Method | Module |
//! |------|--------|--------|
//! | / | GET | [`pages`] |
//! | /order | POST | [`pages`] |
//! | /success/{order_number} | GET | [`pages`] |
//! | /staff | GET | [`pages`] |
//! | /api/orders?key= | GET | [`orders`] |
//! | /api/menu | GET | [`menu`] |
//! | /health | GET | [`health`] |

pub mod health;
pub mod menu;
pub mod orders;
pub mod pages;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Assemble every route and attach state
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(pages::router())
        .merge(orders::router())
        .merge(menu::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
