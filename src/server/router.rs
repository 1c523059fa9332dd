//! Router builder utilities for catalog routes

use crate::server::handlers::{
    AppState, get_order, list_order_details, list_orders, list_pizza_types, list_pizzas,
    pizza_of_the_day,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::path::Path;
use tower_http::services::ServeDir;

/// Build the read-only API routes
///
/// - GET /api/pizzas - Catalog with sizes and prices
/// - GET /api/pizza-of-the-day - Today's pizza
/// - GET /api/pizza_types - Raw pizza types
/// - GET /api/orders - Raw orders
/// - GET /api/orders/{order_id} - One order with resolved line items
/// - GET /api/order_details - Raw order line items
pub fn build_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/pizzas", get(list_pizzas))
        .route("/api/pizza-of-the-day", get(pizza_of_the_day))
        .route("/api/pizza_types", get(list_pizza_types))
        .route("/api/orders", get(list_orders))
        .route("/api/orders/{order_id}", get(get_order))
        .route("/api/order_details", get(list_order_details))
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Serve `public_dir` under `/public`
pub fn static_routes(public_dir: &Path) -> Router {
    Router::new().nest_service("/public", ServeDir::new(public_dir))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "pizza-catalog"
    }))
}
