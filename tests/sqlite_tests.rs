//! Integration tests for the SQLite backend and the snapshot export.
//!
//! Seeds a temporary database, serves it over HTTP, exports it to JSON and
//! checks that the JSON backend answers the same way.

#![cfg(feature = "sqlite")]

mod catalog_harness;

use catalog_harness::*;
use pizza_catalog::prelude::*;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::sync::Arc;

async fn seed_database(path: &Path) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true),
        )
        .await
        .expect("Failed to create test database");

    for statement in [
        "CREATE TABLE pizza_types (pizza_type_id TEXT, name TEXT, category TEXT, ingredients TEXT)",
        "CREATE TABLE pizzas (pizza_id TEXT, pizza_type_id TEXT, size TEXT, price REAL)",
        "CREATE TABLE orders (order_id INTEGER, date TEXT, time TEXT)",
        "CREATE TABLE order_details (order_details_id INTEGER, order_id INTEGER, pizza_id TEXT, quantity INTEGER)",
        "INSERT INTO pizza_types VALUES ('thai_ckn', 'The Thai Chicken Pizza', 'Chicken', 'Chicken, Pineapple')",
        "INSERT INTO pizza_types VALUES ('pepperoni', 'The Pepperoni Pizza', 'Classic', 'Mozzarella, Pepperoni')",
        "INSERT INTO pizzas VALUES ('thai_ckn_l', 'thai_ckn', 'L', 20.75)",
        "INSERT INTO pizzas VALUES ('pepperoni_s', 'pepperoni', 'S', 9.5)",
        "INSERT INTO pizzas VALUES ('pepperoni_m', 'pepperoni', 'M', 12.5)",
        "INSERT INTO orders VALUES (1, '2015-01-01', '11:38:36')",
        "INSERT INTO order_details VALUES (1, 1, 'pepperoni_m', 3)",
        "INSERT INTO order_details VALUES (2, 1, 'thai_ckn_l', 1)",
    ] {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .expect("Failed to seed test database");
    }

    pool.close().await;
}

#[tokio::test]
async fn test_sqlite_backend_serves_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pizza.sqlite");
    seed_database(&path).await;

    let store = open_store(&StoreConfig::Sqlite { path }).await.unwrap();
    assert_eq!(store.backend_name(), "sqlite");
    let server = test_server(store);

    let pizzas: Value = server.get("/api/pizzas").await.json();
    assert_eq!(pizzas[1]["id"], "pepperoni");
    assert_eq!(pizzas[1]["sizes"]["S"], 9.5);
    assert_eq!(pizzas[1]["sizes"]["M"], 12.5);

    let order: Value = server.get("/api/orders/1").await.json();
    assert_eq!(order["items"].as_array().unwrap().len(), 2);
    assert_eq!(order["total"], 58.25);
}

#[tokio::test]
async fn test_export_then_serve_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pizza.sqlite");
    let out = dir.path().join("data");
    seed_database(&path).await;

    let sqlite = SqliteCatalogStore::open(&path).await.unwrap();
    let summaries = export_store(&sqlite, &out).await.unwrap();
    assert_eq!(summaries.iter().map(|s| s.rows).sum::<usize>(), 2 + 3 + 1 + 2);

    let sqlite_server = test_server(Arc::new(sqlite));
    let json_store = open_store(&StoreConfig::Json { dir: out }).await.unwrap();
    let json_server = test_server(json_store);

    for path in ["/api/pizzas", "/api/orders/1", "/api/order_details"] {
        let from_sqlite: Value = sqlite_server.get(path).await.json();
        let from_json: Value = json_server.get(path).await.json();
        assert_eq!(from_sqlite, from_json, "responses differ for {path}");
    }
}
