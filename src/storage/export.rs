//! Snapshot export: dump a store's tables to JSON files
//!
//! The output directory is exactly what [`JsonCatalogStore`](super::JsonCatalogStore)
//! loads, one pretty-printed array per table.

use super::Table;
use crate::core::CatalogStore;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of writing one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub table: Table,
    pub rows: usize,
    pub path: PathBuf,
}

/// Write every table of `store` into `out_dir`, creating it if needed
pub async fn export_store(store: &dyn CatalogStore, out_dir: &Path) -> Result<Vec<ExportSummary>> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let summaries = vec![
        write_table(out_dir, Table::PizzaTypes, &store.list_pizza_types().await?).await?,
        write_table(out_dir, Table::Pizzas, &store.list_pizzas().await?).await?,
        write_table(out_dir, Table::Orders, &store.list_orders().await?).await?,
        write_table(out_dir, Table::OrderDetails, &store.list_order_details().await?).await?,
    ];

    Ok(summaries)
}

async fn write_table<T: Serialize>(
    out_dir: &Path,
    table: Table,
    rows: &[T],
) -> Result<ExportSummary> {
    let path = table.snapshot_path(out_dir);
    let bytes = serde_json::to_vec_pretty(rows)
        .with_context(|| format!("Failed to serialize table {}", table.name()))?;

    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(
        table = table.name(),
        rows = rows.len(),
        path = %path.display(),
        "Exported table"
    );

    Ok(ExportSummary {
        table,
        rows: rows.len(),
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Order, OrderDetail, Pizza, PizzaType};
    use crate::storage::{InMemoryCatalogStore, JsonCatalogStore};

    fn store() -> InMemoryCatalogStore {
        InMemoryCatalogStore::new(
            vec![PizzaType::new("veggie_veg", "The Vegetables Pizza", "Veggie", "Mushrooms")],
            vec![
                Pizza::new("veggie_veg_s", "veggie_veg", "S", 12.0),
                Pizza::new("veggie_veg_l", "veggie_veg", "L", 20.25),
            ],
            vec![Order::new(7, "2015-01-02", "18:03:11")],
            vec![OrderDetail::new(21, 7, "veggie_veg_l", 3)],
        )
    }

    #[tokio::test]
    async fn test_export_writes_one_file_per_table() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("data");

        let summaries = export_store(&store(), &out).await.unwrap();

        let rows: Vec<(Table, usize)> = summaries.iter().map(|s| (s.table, s.rows)).collect();
        assert_eq!(
            rows,
            vec![
                (Table::PizzaTypes, 1),
                (Table::Pizzas, 2),
                (Table::Orders, 1),
                (Table::OrderDetails, 1),
            ]
        );
        for table in Table::ALL {
            assert!(table.snapshot_path(&out).exists());
        }
    }

    #[tokio::test]
    async fn test_exported_snapshot_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let original = store();

        export_store(&original, dir.path()).await.unwrap();
        let loaded = JsonCatalogStore::load(dir.path()).await.unwrap();

        assert_eq!(
            loaded.list_pizzas().await.unwrap(),
            original.list_pizzas().await.unwrap()
        );
        assert_eq!(
            loaded.list_order_details().await.unwrap(),
            original.list_order_details().await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_export_is_pretty_printed_with_column_keys() {
        let dir = tempfile::tempdir().unwrap();
        export_store(&store(), dir.path()).await.unwrap();

        let text = std::fs::read_to_string(Table::Orders.snapshot_path(dir.path())).unwrap();
        assert!(text.starts_with("[\n  {"));
        assert!(text.contains("\"order_id\": 7"));
    }
}
