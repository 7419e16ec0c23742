//! Browser pages: order form, confirmation, staff board

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::order_form))
        .route("/order", post(handler::place_order))
        .route("/success/{order_number}", get(handler::order_success))
        .route("/staff", get(handler::staff))
}
