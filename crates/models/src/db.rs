use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use tracing::info;

/// Open a pooled connection using the `[database]` section of the app config.
/// Foreign keys are switched on before the handle is returned.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opt).await?;
    db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
    Ok(db)
}

/// Connect and make sure the schema exists.
pub async fn bootstrap(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None).await?;
    info!(event = "schema_ready", max_connections = cfg.max_connections, "database ready");
    Ok(db)
}

pub async fn foreign_keys_enabled(db: &DatabaseConnection) -> anyhow::Result<bool> {
    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "PRAGMA foreign_keys".to_string());
    let row = db
        .query_one(stmt)
        .await?
        .ok_or_else(|| anyhow::anyhow!("PRAGMA foreign_keys returned no row"))?;
    let flag: i32 = row.try_get("", "foreign_keys")?;
    Ok(flag == 1)
}
