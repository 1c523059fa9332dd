//! # Pizza Catalog
//!
//! A read-only REST backend for a pizza ordering catalog.
//!
//! ## Features
//!
//! - **Pluggable storage**: SQLite (via sqlx) or JSON snapshot files, behind one
//!   [`CatalogStore`](core::CatalogStore) trait selected at startup
//! - **Catalog view**: pizza types joined to their size/price variants
//! - **Order view**: order line items resolved to pizzas and pizza types
//! - **Pizza of the day**: deterministic pick that changes at each UTC midnight
//! - **Snapshot export**: dump any store to the JSON layout the file backend reads
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pizza_catalog::prelude::*;
//!
//! let store = JsonCatalogStore::load("./data").await?;
//! ServerBuilder::new()
//!     .with_store(store)
//!     .with_public_dir("./public")
//!     .serve("0.0.0.0:3000")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        CatalogEntry, CatalogError, CatalogStore, ImagePaths, Order, OrderDetail, OrderView,
        Pizza, PizzaType, build_catalog, build_catalog_entry, build_order_view, find_order,
        select_pizza_of_the_day,
    };

    // === Storage ===
    pub use crate::storage::{
        ExportSummary, InMemoryCatalogStore, JsonCatalogStore, Table, export_store, open_store,
    };
    #[cfg(feature = "sqlite")]
    pub use crate::storage::SqliteCatalogStore;

    // === Config ===
    pub use crate::config::{AppConfig, AssetsConfig, ServerConfig, StoreConfig};

    // === Server ===
    pub use crate::server::{AppState, Clock, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
}
