//! Storage implementations for different backends

pub mod export;
pub mod in_memory;
pub mod json_files;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use export::{ExportSummary, export_store};
pub use in_memory::InMemoryCatalogStore;
pub use json_files::JsonCatalogStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteCatalogStore;

use crate::config::StoreConfig;
use crate::core::{CatalogError, CatalogStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The four catalog tables, in export order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    PizzaTypes,
    Pizzas,
    Orders,
    OrderDetails,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::PizzaTypes,
        Table::Pizzas,
        Table::Orders,
        Table::OrderDetails,
    ];

    /// Table name in the database
    pub fn name(&self) -> &'static str {
        match self {
            Table::PizzaTypes => "pizza_types",
            Table::Pizzas => "pizzas",
            Table::Orders => "orders",
            Table::OrderDetails => "order_details",
        }
    }

    /// `<dir>/<name>.json`
    pub fn snapshot_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", self.name()))
    }
}

/// Open the backend selected by configuration
///
/// Any failure here is `StoreUnavailable` and should end the process.
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn CatalogStore>, CatalogError> {
    match config {
        #[cfg(feature = "sqlite")]
        StoreConfig::Sqlite { path } => Ok(Arc::new(SqliteCatalogStore::open(path).await?)),
        #[cfg(not(feature = "sqlite"))]
        StoreConfig::Sqlite { path } => Err(CatalogError::store_unavailable(
            path.display().to_string(),
            "built without the `sqlite` feature",
        )),
        StoreConfig::Json { dir } => Ok(Arc::new(JsonCatalogStore::load(dir).await?)),
    }
}
