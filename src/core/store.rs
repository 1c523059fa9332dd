//! Store trait for read-only catalog access

use crate::core::entity::{Order, OrderDetail, Pizza, PizzaType};
use anyhow::Result;
use async_trait::async_trait;

/// Read-only access to the four catalog collections
///
/// Every method returns the full, unfiltered collection in the order the
/// backend yields it. That order matters: the pizza of the day indexes into
/// `list_pizza_types` directly, so a backend must return the same order on
/// every call within a process.
///
/// Backends are opened once by the composition root and shared behind an
/// `Arc<dyn CatalogStore>`.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Short backend name used in logs (e.g. "sqlite", "json")
    fn backend_name(&self) -> &'static str;

    async fn list_pizza_types(&self) -> Result<Vec<PizzaType>>;

    async fn list_pizzas(&self) -> Result<Vec<Pizza>>;

    async fn list_orders(&self) -> Result<Vec<Order>>;

    async fn list_order_details(&self) -> Result<Vec<OrderDetail>>;
}
