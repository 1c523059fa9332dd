mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Backend, Cli, Commands};
use pizza_catalog::config::{AppConfig, StoreConfig, default_data_dir, default_database_path};
use pizza_catalog::server::ServerBuilder;
use pizza_catalog::storage::open_store;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Serve {
            config,
            backend,
            database,
            data_dir,
            port,
        } => {
            let mut app_config = match config {
                Some(path) => AppConfig::from_yaml_file(&path)?,
                None => AppConfig::default(),
            }
            .with_env_overrides()?;

            app_config.store = store_overrides(app_config.store, backend, database, data_dir);
            if let Some(port) = port {
                app_config.server.port = port;
            }

            serve(app_config).await
        }
        Commands::Export { database, out } => export(database, out).await,
    }
}

/// Initialize tracing; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .init();
}

fn store_overrides(
    current: StoreConfig,
    backend: Option<Backend>,
    database: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> StoreConfig {
    let backend = backend.unwrap_or(match current {
        StoreConfig::Sqlite { .. } => Backend::Sqlite,
        StoreConfig::Json { .. } => Backend::Json,
    });

    match (backend, current) {
        (Backend::Sqlite, StoreConfig::Sqlite { path }) => StoreConfig::Sqlite {
            path: database.unwrap_or(path),
        },
        (Backend::Sqlite, StoreConfig::Json { .. }) => StoreConfig::Sqlite {
            path: database.unwrap_or_else(default_database_path),
        },
        (Backend::Json, StoreConfig::Json { dir }) => StoreConfig::Json {
            dir: data_dir.unwrap_or(dir),
        },
        (Backend::Json, StoreConfig::Sqlite { .. }) => StoreConfig::Json {
            dir: data_dir.unwrap_or_else(default_data_dir),
        },
    }
}

async fn serve(config: AppConfig) -> Result<()> {
    tracing::info!(backend = config.store.backend_name(), "Opening catalog store");

    let store = match open_store(&config.store).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };

    ServerBuilder::new()
        .with_shared_store(store)
        .with_image_paths(config.image_paths())
        .with_public_dir(config.assets.public_dir.clone())
        .serve(&config.server.bind_address())
        .await
}

#[cfg(feature = "sqlite")]
async fn export(database: PathBuf, out: PathBuf) -> Result<()> {
    use pizza_catalog::storage::{SqliteCatalogStore, export_store};

    let store = match SqliteCatalogStore::open(&database).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };

    let summaries = export_store(&store, &out).await?;
    store.close().await;

    let rows: usize = summaries.iter().map(|summary| summary.rows).sum();
    tracing::info!(
        tables = summaries.len(),
        rows,
        out = %out.display(),
        "Export complete"
    );
    Ok(())
}

#[cfg(not(feature = "sqlite"))]
async fn export(_database: PathBuf, _out: PathBuf) -> Result<()> {
    anyhow::bail!("export requires the `sqlite` feature")
}
