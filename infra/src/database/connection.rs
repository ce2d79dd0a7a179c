//! MySQL connection pool setup

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

use lh_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Create a MySQL connection pool from configuration
///
/// # Arguments
/// * `config` - Database configuration with URL and pool sizing
///
/// # Returns
/// * `Ok(MySqlPool)` - Connected pool
/// * `Err(InfrastructureError)` - Connection failed
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    tracing::info!(
        max_connections = config.max_connections,
        "Connecting to MySQL"
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.url)
        .await?;

    Ok(pool)
}
