//! HTTP handlers for the catalog API
//!
//! Handlers fetch raw collections from the store, hand them to the pure
//! aggregation functions, and serialize the result. Every failure comes
//! back as a [`CatalogError`], which renders its own response.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::core::{
    CatalogEntry, CatalogError, CatalogStore, ImagePaths, Order, OrderDetail, OrderView,
    PizzaType, build_catalog, build_catalog_entry, build_order_view, find_order,
    select_pizza_of_the_day,
};

/// Source of the current time for date-dependent handlers
pub type Clock = fn() -> DateTime<Utc>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub images: Arc<ImagePaths>,
    pub clock: Clock,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, images: ImagePaths) -> Self {
        Self {
            store,
            images: Arc::new(images),
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

/// GET /api/pizzas
pub async fn list_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<CatalogEntry>>, CatalogError> {
    let (pizza_types, pizzas) =
        tokio::try_join!(state.store.list_pizza_types(), state.store.list_pizzas())?;

    Ok(Json(build_catalog(&pizza_types, &pizzas, &state.images)))
}

/// GET /api/pizza-of-the-day
pub async fn pizza_of_the_day(
    State(state): State<AppState>,
) -> Result<Json<CatalogEntry>, CatalogError> {
    let pizza_types = state.store.list_pizza_types().await?;
    let pizza_type = select_pizza_of_the_day(&pizza_types, (state.clock)())?;
    let pizzas = state.store.list_pizzas().await?;

    tracing::debug!(pizza_type_id = %pizza_type.pizza_type_id, "Selected pizza of the day");

    Ok(Json(build_catalog_entry(pizza_type, &pizzas, &state.images)))
}

/// GET /api/pizza_types
pub async fn list_pizza_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<PizzaType>>, CatalogError> {
    Ok(Json(state.store.list_pizza_types().await?))
}

/// GET /api/orders
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, CatalogError> {
    Ok(Json(state.store.list_orders().await?))
}

/// GET /api/order_details
pub async fn list_order_details(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderDetail>>, CatalogError> {
    Ok(Json(state.store.list_order_details().await?))
}

/// GET /api/orders/{order_id}
///
/// An id that is not an integer cannot match any order and is a 404.
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderView>, CatalogError> {
    let id: i64 = order_id
        .trim()
        .parse()
        .map_err(|_| CatalogError::order_not_found(order_id.clone()))?;

    let orders = state.store.list_orders().await?;
    let order = find_order(&orders, id)?;

    let (order_details, pizzas, pizza_types) = tokio::try_join!(
        state.store.list_order_details(),
        state.store.list_pizzas(),
        state.store.list_pizza_types(),
    )?;

    let view = build_order_view(order, &order_details, &pizzas, &pizza_types)?;
    Ok(Json(view))
}
