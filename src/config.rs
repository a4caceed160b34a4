use std::net::SocketAddr;

use anyhow::{bail, Context};

use crate::services::projection::{ProjectionSettings, DEFAULT_INTEREST_RATE_PERCENT, PROJECTION_HORIZON_YEARS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub run_migrations: bool,
    pub bind_addr: SocketAddr,
    pub projection: ProjectionSettings,
    pub memory_owner_ids: Vec<i32>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so parsing can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_backend = match lookup("STORAGE_BACKEND")
            .unwrap_or_else(|| "postgres".to_string())
            .to_lowercase()
            .as_str()
        {
            "postgres" => StorageBackend::Postgres,
            "memory" => StorageBackend::Memory,
            other => bail!("Invalid STORAGE_BACKEND: {}. Must be 'postgres' or 'memory'", other),
        };

        let database_url = lookup("DATABASE_URL");
        if storage_backend == StorageBackend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when STORAGE_BACKEND is postgres");
        }

        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 10u32)?;
        let run_migrations = parse_or(&lookup, "RUN_MIGRATIONS", false)?;
        let bind_addr = parse_or(&lookup, "BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?;

        let projection = ProjectionSettings {
            default_rate_percent: parse_or(&lookup, "PROJECTION_DEFAULT_RATE", DEFAULT_INTEREST_RATE_PERCENT)?,
            horizon_years: parse_or(&lookup, "PROJECTION_HORIZON_YEARS", PROJECTION_HORIZON_YEARS)?,
        };

        let memory_owner_ids = lookup("MEMORY_OWNER_IDS")
            .unwrap_or_else(|| "1".to_string())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i32>()
                    .with_context(|| format!("Invalid owner id in MEMORY_OWNER_IDS: {}", s))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            storage_backend,
            database_url,
            db_max_connections,
            run_migrations,
            bind_addr,
            projection,
            memory_owner_ids,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value for {}: {}", key, raw)),
        None => Ok(default),
    }
}
