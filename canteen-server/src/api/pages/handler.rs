//! Page Handlers

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::core::ServerState;
use crate::orders::{OrderError, OrderForm};
use crate::pages;
use crate::utils::AppResult;

/// GET / - order form
pub async fn order_form(State(state): State<ServerState>) -> Html<String> {
    Html(pages::order_form(&state.orders.menu().entries(), None))
}

/// POST /order - place an order, then redirect to its confirmation
///
/// Validation failures re-render the form with the reason.
pub async fn place_order(
    State(state): State<ServerState>,
    Form(form): Form<OrderForm>,
) -> AppResult<Response> {
    match state.orders.place_order(&form).await {
        Ok(order) => {
            Ok(Redirect::to(&format!("/success/{}", order.order_number)).into_response())
        }
        Err(OrderError::Validation(e)) => {
            let html = pages::order_form(&state.orders.menu().entries(), Some(&e.to_string()));
            Ok((StatusCode::BAD_REQUEST, Html(html)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /success/{order_number} - order confirmation
pub async fn order_success(
    State(state): State<ServerState>,
    Path(order_number): Path<String>,
) -> AppResult<Html<String>> {
    let order = state.orders.get_order_by_number(&order_number).await?;
    Ok(Html(pages::order_success(&order)))
}

/// GET /staff - staff board
pub async fn staff() -> Html<String> {
    Html(pages::staff_page())
}
