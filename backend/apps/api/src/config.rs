//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env` is loaded).
//! Any value that is present but unreadable aborts startup.

use anyhow::{Context, bail};
use axum::http::HeaderValue;
use problem::ProblemConfig;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

/// Where problems are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// Process-local store; contents are lost on restart
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub problem: ProblemConfig,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<HeaderValue>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let store = match lookup("PROBLEM_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => StoreConfig::Postgres {
                database_url: lookup("DATABASE_URL")
                    .context("DATABASE_URL must be set in environment")?,
                max_connections: match lookup("DATABASE_MAX_CONNECTIONS") {
                    Some(raw) => raw
                        .trim()
                        .parse()
                        .with_context(|| format!("Invalid DATABASE_MAX_CONNECTIONS: {raw}"))?,
                    None => DEFAULT_MAX_CONNECTIONS,
                },
            },
            Some("memory") => StoreConfig::Memory,
            Some(other) => bail!("Unknown PROBLEM_STORE '{other}' (expected postgres or memory)"),
        };

        let problem = match lookup("STORE_TIMEOUT_MS") {
            Some(raw) => {
                let millis: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid STORE_TIMEOUT_MS: {raw}"))?;
                if millis == 0 {
                    bail!("STORE_TIMEOUT_MS must be greater than zero");
                }
                ProblemConfig::with_store_timeout(Duration::from_millis(millis))
            }
            None => ProblemConfig::default(),
        };

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse()
            .with_context(|| format!("Invalid BIND_ADDR: {bind_addr}"))?;

        let origins =
            lookup("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string());
        let frontend_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse()
                    .with_context(|| format!("Invalid origin in FRONTEND_ORIGINS: {origin}"))
            })
            .collect::<anyhow::Result<Vec<HeaderValue>>>()?;

        Ok(Self {
            store,
            problem,
            bind_addr,
            frontend_origins,
        })
    }
}
