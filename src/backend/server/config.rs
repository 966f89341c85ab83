/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables
 * (a `.env` file is read first by the binary).
 *
 * # Variables
 *
 * - `SERVER_PORT` - Listen port, default 3000
 * - `DATABASE_URL` - Postgres URL; without it messages live in memory
 * - `PUSHER_APP_ID`, `PUSHER_KEY`, `PUSHER_SECRET`, `PUSHER_CLUSTER` -
 *   Pusher credentials, all four or none
 * - `PUSHER_HOST` - Optional override of the Pusher API base URL
 *
 * # Error Handling
 *
 * Configuration problems are logged but do not prevent server startup.
 * Services that fail to initialize are left out and the server continues
 * without them.
 */

use crate::backend::realtime::PusherConfig;
use sqlx::PgPool;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub pusher: Option<PusherConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            pusher: None,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("SERVER_PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            port,
            database_url: lookup("DATABASE_URL"),
            pusher: load_pusher(&lookup),
        }
    }
}

/// Load Pusher credentials
///
/// # Returns
///
/// - `Some(PusherConfig)` if all four credentials are set
/// - `None` if none are set, or if only some are (with a warning)
pub fn load_pusher(lookup: impl Fn(&str) -> Option<String>) -> Option<PusherConfig> {
    let app_id = lookup("PUSHER_APP_ID");
    let key = lookup("PUSHER_KEY");
    let secret = lookup("PUSHER_SECRET");
    let cluster = lookup("PUSHER_CLUSTER");

    match (app_id, key, secret, cluster) {
        (Some(app_id), Some(key), Some(secret), Some(cluster)) => Some(PusherConfig {
            app_id,
            key,
            secret,
            cluster,
            host: lookup("PUSHER_HOST"),
        }),
        (None, None, None, None) => {
            tracing::warn!("Pusher credentials not set. Events will only reach /api/realtime subscribers.");
            None
        }
        _ => {
            tracing::warn!(
                "Pusher is partially configured; PUSHER_APP_ID, PUSHER_KEY, PUSHER_SECRET and PUSHER_CLUSTER are all required. Pusher disabled."
            );
            None
        }
    }
}

/// Connect to Postgres and run migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is reachable
/// - `None` if `database_url` is `None` or the connection fails
pub async fn load_database(database_url: Option<&str>) -> Option<PgPool> {
    let database_url = match database_url {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set. Messages will be kept in memory only.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to the in-memory message store.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}
