mod app;
mod config;
mod db;
mod errors;
mod logging;
mod models;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use crate::config::{AppConfig, StorageBackend};
use crate::logging::LoggingConfig;
use crate::services::investment_repository::InvestmentRepository;
use crate::state::AppState;
use crate::store::{InMemoryInvestmentStore, InvestmentStore, PgInvestmentStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let config = AppConfig::from_env()?;

    let store: Arc<dyn InvestmentStore> = match config.storage_backend {
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is not set")?;
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;

            if config.run_migrations {
                tracing::info!("🗄️ Running database migrations");
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to run migrations")?;
            }

            tracing::info!("🗄️ Using storage backend: Postgres");
            Arc::new(PgInvestmentStore::new(pool))
        }
        StorageBackend::Memory => {
            tracing::info!(
                "🗄️ Using storage backend: in-memory (owners {:?})",
                config.memory_owner_ids
            );
            Arc::new(InMemoryInvestmentStore::with_owners(config.memory_owner_ids.iter().copied()))
        }
    };

    let state = AppState {
        investments: InvestmentRepository::new(store, config.projection),
    };
    let app = app::create_app(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("🚀 Investment tracker backend running at http://{}/", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
