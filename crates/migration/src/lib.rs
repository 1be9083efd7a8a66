//! Migrator registering entity-specific migrations in dependency order.
//! Every migration is idempotent (`IF NOT EXISTS`), so running `up` at each
//! startup only ensures the schema exists.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_snippets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            // snippets reference users, keep it after
            Box::new(m20240101_000002_create_snippets::Migration),
        ]
    }
}
