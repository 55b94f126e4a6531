//! Catalog persistence: pool setup, schema migrations and repositories

pub mod connection;
pub mod repositories;

use sqlx::PgPool;

pub use connection::*;

/// Apply the embedded catalog schema migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    let migrator = sqlx::migrate!("./migrations");
    tracing::debug!(known = migrator.iter().count(), "Applying catalog migrations");
    migrator.run(pool).await
}
