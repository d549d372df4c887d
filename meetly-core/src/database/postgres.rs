use std::{fmt, sync::Arc, time::Duration};

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

use crate::{
    MIGRATOR,
    database::repositories::profiles::PostgresProfilesRepository,
    error::{ProfileError, Result},
};

/// Connection pool tuning.
#[derive(Debug, Clone, Copy)]
pub struct DatabaseOptions {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: PgPool,
    options: DatabaseOptions,
    profiles: PostgresProfilesRepository,
}

impl fmt::Debug for PostgresDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresDatabase")
            .field("pool_size", &self.pool.size())
            .field("idle_connections", &self.pool.num_idle())
            .field("max_connections", &self.options.max_connections)
            .finish()
    }
}

impl PostgresDatabase {
    pub async fn new(connection_string: &str, options: DatabaseOptions) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(options.max_connections)
            .min_connections(options.min_connections)
            .acquire_timeout(options.acquire_timeout)
            .max_lifetime(Duration::from_secs(1800))
            .idle_timeout(Duration::from_secs(600))
            .connect(connection_string)
            .await?;

        info!(
            "Database pool initialized with max_connections={}, min_connections={}",
            options.max_connections, options.min_connections
        );

        Ok(Self::from_pool(pool, options))
    }

    /// Wraps an existing pool, e.g. one handed out by `#[sqlx::test]`.
    pub fn from_pool(pool: PgPool, options: DatabaseOptions) -> Self {
        let profiles = PostgresProfilesRepository::new(pool.clone());
        Self {
            pool,
            options,
            profiles,
        }
    }

    pub fn profiles(&self) -> Arc<PostgresProfilesRepository> {
        Arc::new(self.profiles.clone())
    }

    pub async fn run_migrations(&self) -> Result<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| ProfileError::Internal(format!("Migration failed: {}", e)))?;
        info!("Database migrations applied");
        Ok(())
    }
}
