//! Runtime configuration read from the environment

use anyhow::{Context, bail};
use platform::database::DatabaseConfig;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Credentials of the user created at startup when absent
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database: DatabaseConfig,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub seed_user: Option<SeedUser>,
}

impl ApiConfig {
    /// Read from the process environment (after `.env` is loaded)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut database = DatabaseConfig::default();
        if let Some(url) = lookup("DATABASE_URL") {
            database.url = url;
        }
        if let Some(raw) = lookup("DATABASE_MAX_CONNECTIONS") {
            database.max_connections = raw
                .trim()
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw:?}"))?;
            if database.max_connections == 0 {
                bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
            }
        }

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_raw:?}"))?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let seed_user = match (lookup("SEED_USERNAME"), lookup("SEED_PASSWORD")) {
            (Some(username), Some(password)) => Some(SeedUser { username, password }),
            (None, None) => None,
            _ => bail!("SEED_USERNAME and SEED_PASSWORD must be set together"),
        };

        Ok(Self {
            database,
            bind_addr,
            frontend_origins,
            seed_user,
        })
    }
}
