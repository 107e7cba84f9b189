use std::time::Duration;

use backon::{ConstantBuilder, Retryable};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the level follows the debug flag
/// (`debug` when enabled, `info` when not).
///
/// # Arguments
/// - `config` - Application configuration providing the debug flag
pub fn init_tracing(config: &Config) {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Builds the connection pool from the configured URL and pool bounds, retrying the
/// initial connection with a constant delay so the service tolerates a database that
/// is still starting. Migrations run once the pool is up, before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Every connection attempt failed or a migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .acquire_timeout(config.database_acquire_timeout)
        .sqlx_logging(config.debug);

    let retries = config.database_connect_attempts.saturating_sub(1);
    let db = (|| async { Database::connect(opt.clone()).await })
        .retry(
            ConstantBuilder::default()
                .with_delay(config.database_connect_retry_delay)
                .with_max_times(retries),
        )
        .notify(|err, delay: Duration| {
            tracing::warn!("Database connection failed, retrying in {:?}: {}", delay, err);
        })
        .await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}
