//! SQLite storage backend using sqlx.
//!
//! Provides `SqliteCatalogStore`, backed by a `sqlx::SqlitePool` opened
//! read-only against an existing database file.
//!
//! # Feature flag
//!
//! This module is gated behind the `sqlite` feature flag (on by default).
//!
//! # Schema
//!
//! Reads the tables `pizza_types`, `pizzas`, `orders` and `order_details`
//! in `rowid` order. Prices and order date/time columns are cast to TEXT in
//! the query, so REAL and TEXT storage classes decode the same way.

use crate::core::entity::parse_price;
use crate::core::{CatalogError, CatalogStore, Order, OrderDetail, Pizza, PizzaType};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;

const MAX_CONNECTIONS: u32 = 4;

/// Catalog store backed by a SQLite database
///
/// # Example
///
/// ```rust,ignore
/// use pizza_catalog::storage::SqliteCatalogStore;
///
/// let store = SqliteCatalogStore::open("./pizza.sqlite").await?;
/// let types = store.list_pizza_types().await?;
/// ```
#[derive(Clone, Debug)]
pub struct SqliteCatalogStore {
    pool: SqlitePool,
}

impl SqliteCatalogStore {
    /// Wrap an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open `path` read-only
    ///
    /// The file must already exist. Connection failures map to
    /// `StoreUnavailable`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|e| CatalogError::store_unavailable(path.display().to_string(), e))?;

        tracing::info!(path = %path.display(), "Connected to SQLite catalog");
        Ok(Self::new(pool))
    }

    /// Close the underlying pool, waiting for checked-out connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalogStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn list_pizza_types(&self) -> Result<Vec<PizzaType>> {
        let rows = sqlx::query_as::<_, (String, String, String, String)>(
            "SELECT pizza_type_id, name, category, ingredients FROM pizza_types ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to list pizza types: {}", e))?;

        Ok(rows
            .into_iter()
            .map(|(pizza_type_id, name, category, ingredients)| PizzaType {
                pizza_type_id,
                name,
                category,
                ingredients,
            })
            .collect())
    }

    async fn list_pizzas(&self) -> Result<Vec<Pizza>> {
        let rows = sqlx::query_as::<_, (String, String, String, String)>(
            "SELECT pizza_id, pizza_type_id, size, CAST(price AS TEXT) FROM pizzas ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to list pizzas: {}", e))?;

        rows.into_iter()
            .map(|(pizza_id, pizza_type_id, size, price)| {
                let price = parse_price(&price)
                    .map_err(|e| anyhow!("Pizza '{}' has unreadable price: {}", pizza_id, e))?;
                Ok(Pizza {
                    pizza_id,
                    pizza_type_id,
                    size,
                    price,
                })
            })
            .collect()
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT order_id, CAST(date AS TEXT), CAST(time AS TEXT) FROM orders ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to list orders: {}", e))?;

        Ok(rows
            .into_iter()
            .map(|(order_id, date, time)| Order {
                order_id,
                date,
                time,
            })
            .collect())
    }

    async fn list_order_details(&self) -> Result<Vec<OrderDetail>> {
        let rows = sqlx::query_as::<_, (i64, i64, String, i64)>(
            "SELECT order_details_id, order_id, pizza_id, quantity FROM order_details \
             ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to list order details: {}", e))?;

        Ok(rows
            .into_iter()
            .map(|(order_details_id, order_id, pizza_id, quantity)| OrderDetail {
                order_details_id,
                order_id,
                pizza_id,
                quantity,
            })
            .collect())
    }
}
