//! Menu API

use axum::{Json, Router, extract::State, routing::get};
use shared::models::MenuEntry;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu", get(list))
}

/// GET /api/menu - current menu with form indexes
async fn list(State(state): State<ServerState>) -> Json<Vec<MenuEntry>> {
    Json(state.orders.menu().entries())
}
