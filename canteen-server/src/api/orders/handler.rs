//! Order API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::OrderList;

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct KeyQuery {
    pub key: Option<String>,
}

/// GET /api/orders?key= - all orders, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<KeyQuery>,
) -> AppResult<Json<OrderList>> {
    let orders = state.orders.list_orders(query.key.as_deref()).await?;
    Ok(Json(OrderList { orders }))
}
