use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::storage_config::PostgresSettings;

/// Connect to PostgreSQL and bring the schema up to date
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &PostgresSettings) -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::new(settings.database_url.clone())
        .with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    Ok(pool)
}
