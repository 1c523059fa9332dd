//! JSON snapshot backend
//!
//! Reads the four `<table>.json` files written by the export utility from a
//! single directory, once, at startup. After loading, reads are served from
//! an [`InMemoryCatalogStore`].
//!
//! # Layout
//!
//! ```text
//! data/
//!   pizza_types.json
//!   pizzas.json
//!   orders.json
//!   order_details.json
//! ```

use super::{InMemoryCatalogStore, Table};
use crate::core::{CatalogError, CatalogStore, Order, OrderDetail, Pizza, PizzaType};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::Path;

#[derive(Clone, Debug)]
pub struct JsonCatalogStore {
    inner: InMemoryCatalogStore,
}

impl JsonCatalogStore {
    /// Load every snapshot file from `dir`
    ///
    /// A missing or malformed file makes the whole store unavailable.
    pub async fn load(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();

        let pizza_types: Vec<PizzaType> = load_table(dir, Table::PizzaTypes).await?;
        let pizzas: Vec<Pizza> = load_table(dir, Table::Pizzas).await?;
        let orders: Vec<Order> = load_table(dir, Table::Orders).await?;
        let order_details: Vec<OrderDetail> = load_table(dir, Table::OrderDetails).await?;

        tracing::info!(
            dir = %dir.display(),
            pizza_types = pizza_types.len(),
            pizzas = pizzas.len(),
            orders = orders.len(),
            order_details = order_details.len(),
            "Loaded JSON catalog snapshot"
        );

        Ok(Self {
            inner: InMemoryCatalogStore::new(pizza_types, pizzas, orders, order_details),
        })
    }
}

async fn load_table<T: DeserializeOwned>(
    dir: &Path,
    table: Table,
) -> Result<Vec<T>, CatalogError> {
    let path = table.snapshot_path(dir);
    read_rows(&path).await.map_err(|e| {
        CatalogError::store_unavailable(path.display().to_string(), format!("{:#}", e))
    })
}

async fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| anyhow!("Failed to read snapshot: {}", e))?;

    serde_json::from_slice(&bytes).map_err(|e| anyhow!("Failed to parse snapshot: {}", e))
}

#[async_trait]
impl CatalogStore for JsonCatalogStore {
    fn backend_name(&self) -> &'static str {
        "json"
    }

    async fn list_pizza_types(&self) -> Result<Vec<PizzaType>> {
        self.inner.list_pizza_types().await
    }

    async fn list_pizzas(&self) -> Result<Vec<Pizza>> {
        self.inner.list_pizzas().await
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        self.inner.list_orders().await
    }

    async fn list_order_details(&self) -> Result<Vec<OrderDetail>> {
        self.inner.list_order_details().await
    }
}
