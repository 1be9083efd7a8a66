#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh, migrated in-memory database; each call is isolated from the others.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::bootstrap(&DatabaseConfig::in_memory()).await
}
