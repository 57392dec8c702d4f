use std::{collections::HashMap, time::Duration};

use lazy_static::lazy_static;
use serde::Serialize;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use tracing::warn;

pub type EnvMap = HashMap<String, String>;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DATABASE: &str = "production";
pub const POOL_MAX: u32 = 20;
pub const POOL_IDLE_TIMEOUT_MILLIS: u64 = 30_000;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SslConfig {
    pub reject_unauthorized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<String>, // PEM contents, not a path
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PoolConfig {
    pub max: u32,
    pub idle_timeout_millis: u64,
}

/// Database connection parameters.
///
/// Only host, port, database and CA come from the environment; TLS
/// verification and pool sizing are fixed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub ssl: SslConfig,
    pub pool: PoolConfig,
}

lazy_static! {
    static ref DB_CONFIG: DbConfig = DbConfig::from_env();
}

/// Process-wide config, read from the environment on first access.
pub fn db_config() -> &'static DbConfig {
    &DB_CONFIG
}

// Unset and empty variables both fall back.
fn non_empty<'a>(env: &'a EnvMap, key: &str) -> Option<&'a str> {
    env.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

pub fn load_db_config(env: &EnvMap) -> DbConfig {
    let port = match non_empty(env, "DB_PORT") {
        Some(value) => value.parse::<u16>().unwrap_or_else(|error| {
            warn!(%value, %error, "invalid DB_PORT, using default");
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    };

    DbConfig {
        host: non_empty(env, "DB_HOST").unwrap_or(DEFAULT_HOST).to_owned(),
        port,
        database: non_empty(env, "DB_NAME")
            .unwrap_or(DEFAULT_DATABASE)
            .to_owned(),
        ssl: SslConfig {
            reject_unauthorized: true,
            ca: env.get("DB_CA_CERT").cloned(),
        },
        pool: PoolConfig {
            max: POOL_MAX,
            idle_timeout_millis: POOL_IDLE_TIMEOUT_MILLIS,
        },
    }
}

impl DbConfig {
    pub fn from_env() -> Self {
        load_db_config(&std::env::vars().collect())
    }

    /// Driver options for this config. Does not open a connection.
    pub fn connect_options(&self) -> PgConnectOptions {
        let ssl_mode = if self.ssl.reject_unauthorized {
            PgSslMode::VerifyFull
        } else {
            PgSslMode::Require
        };
        let mut opts = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .ssl_mode(ssl_mode);
        if let Some(ca) = &self.ssl.ca {
            opts = opts.ssl_root_cert_from_pem(ca.clone().into_bytes());
        }
        opts
    }

    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.pool.max)
            .idle_timeout(Duration::from_millis(self.pool.idle_timeout_millis))
    }
}
