//! In-memory implementation of CatalogStore
//!
//! Holds the four collections behind `Arc` so clones are cheap. Backs the
//! JSON snapshot store and is handy for tests and development.

use crate::core::{CatalogStore, Order, OrderDetail, Pizza, PizzaType};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalogStore {
    pizza_types: Arc<Vec<PizzaType>>,
    pizzas: Arc<Vec<Pizza>>,
    orders: Arc<Vec<Order>>,
    order_details: Arc<Vec<OrderDetail>>,
}

impl InMemoryCatalogStore {
    /// Create a store over already-loaded collections
    pub fn new(
        pizza_types: Vec<PizzaType>,
        pizzas: Vec<Pizza>,
        orders: Vec<Order>,
        order_details: Vec<OrderDetail>,
    ) -> Self {
        Self {
            pizza_types: Arc::new(pizza_types),
            pizzas: Arc::new(pizzas),
            orders: Arc::new(orders),
            order_details: Arc::new(order_details),
        }
    }

    /// Row counts as (pizza types, pizzas, orders, order details)
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.pizza_types.len(),
            self.pizzas.len(),
            self.orders.len(),
            self.order_details.len(),
        )
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    fn backend_name(&self) -> &'static str {
        "in-memory"
    }

    async fn list_pizza_types(&self) -> Result<Vec<PizzaType>> {
        Ok(self.pizza_types.as_ref().clone())
    }

    async fn list_pizzas(&self) -> Result<Vec<Pizza>> {
        Ok(self.pizzas.as_ref().clone())
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.as_ref().clone())
    }

    async fn list_order_details(&self) -> Result<Vec<OrderDetail>> {
        Ok(self.order_details.as_ref().clone())
    }
}
