//! Shared fixtures for catalog integration tests
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod catalog_harness;
//! use catalog_harness::*;
//! ```

#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum_test::TestServer;
use pizza_catalog::prelude::*;
use std::sync::Arc;

/// Three pizza types, in a fixed order, with sizes for the first two
pub fn sample_store() -> InMemoryCatalogStore {
    InMemoryCatalogStore::new(
        vec![
            PizzaType::new(
                "bbq_ckn",
                "The Barbecue Chicken Pizza",
                "Chicken",
                "Barbecued Chicken, Red Peppers, Green Peppers",
            ),
            PizzaType::new(
                "cali_ckn",
                "The California Chicken Pizza",
                "Chicken",
                "Chicken, Artichoke, Spinach, Garlic",
            ),
            PizzaType::new(
                "five_cheese",
                "The Five Cheese Pizza",
                "Veggie",
                "Mozzarella, Provolone",
            ),
        ],
        vec![
            Pizza::new("bbq_ckn_s", "bbq_ckn", "S", 12.75),
            Pizza::new("bbq_ckn_m", "bbq_ckn", "M", 16.75),
            Pizza::new("bbq_ckn_l", "bbq_ckn", "L", 20.75),
            Pizza::new("cali_ckn_l", "cali_ckn", "L", 20.75),
        ],
        vec![
            Order::new(1, "2015-01-01", "11:38:36"),
            Order::new(2, "2015-01-01", "11:57:40"),
        ],
        vec![
            OrderDetail::new(1, 1, "bbq_ckn_m", 1),
            OrderDetail::new(2, 2, "bbq_ckn_s", 2),
            OrderDetail::new(3, 2, "cali_ckn_l", 1),
        ],
    )
}

/// A store whose order lines point at a pizza that does not exist
pub fn broken_reference_store() -> InMemoryCatalogStore {
    InMemoryCatalogStore::new(
        vec![PizzaType::new("bbq_ckn", "The Barbecue Chicken Pizza", "Chicken", "")],
        vec![Pizza::new("bbq_ckn_s", "bbq_ckn", "S", 12.75)],
        vec![Order::new(1, "2015-01-01", "11:38:36")],
        vec![OrderDetail::new(1, 1, "ghost_xl", 1)],
    )
}

/// A store whose every read fails
pub struct FailingStore;

#[async_trait]
impl CatalogStore for FailingStore {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn list_pizza_types(&self) -> Result<Vec<PizzaType>> {
        Err(anyhow!("connection reset"))
    }

    async fn list_pizzas(&self) -> Result<Vec<Pizza>> {
        Err(anyhow!("connection reset"))
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        Err(anyhow!("connection reset"))
    }

    async fn list_order_details(&self) -> Result<Vec<OrderDetail>> {
        Err(anyhow!("connection reset"))
    }
}

pub fn test_server(store: Arc<dyn CatalogStore>) -> TestServer {
    test_server_with_clock(store, Utc::now)
}

/// Like [`test_server`], with the pizza of the day picked at `clock()`
pub fn test_server_with_clock(store: Arc<dyn CatalogStore>, clock: Clock) -> TestServer {
    let router = ServerBuilder::new()
        .with_shared_store(store)
        .with_clock(clock)
        .build()
        .unwrap();
    TestServer::new(router).unwrap()
}

/// `day` whole days after the epoch, plus a few hours
pub fn utc_day(day: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(day * 86_400_000 + 5 * 3_600_000).unwrap()
}
