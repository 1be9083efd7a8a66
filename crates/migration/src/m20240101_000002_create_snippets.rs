//! Create `snippets` table with FK to `users`.
//!
//! Soft-deleted through `deleted_at`; the FK is only enforced when the
//! connection has `PRAGMA foreign_keys = ON`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Snippets::Table)
                    .if_not_exists()
                    .col(pk_auto(Snippets::Id))
                    .col(integer(Snippets::UserId))
                    .col(text(Snippets::Snippet))
                    .col(text(Snippets::Language))
                    .col(ColumnDef::new(Snippets::DeletedAt).timestamp().null())
                    .col(
                        ColumnDef::new(Snippets::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Snippets::UpdatedAt).timestamp().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_snippets_user")
                            .from(Snippets::Table, Snippets::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Snippets::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Snippets { Table, Id, UserId, Snippet, Language, DeletedAt, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Users { Table, Id }
