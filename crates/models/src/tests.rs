//! Database-backed tests against a private in-memory SQLite database.
use chrono::Utc;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::{db, snippet, user};

async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    db::bootstrap(&DatabaseConfig::in_memory()).await
}

#[tokio::test]
async fn bootstrap_enables_foreign_keys_and_is_rerunnable() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    assert!(db::foreign_keys_enabled(&db).await?);
    // schema already applied; running again is a no-op
    migration::Migrator::up(&db, None).await?;
    assert!(user::list(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn insert_returns_generated_columns() -> anyhow::Result<()> {
    let db = setup_test_db().await?;

    let before = Utc::now().naive_utc() - chrono::Duration::seconds(5);
    let created = user::insert(&db, user::NewUser::parse(" Bell ", "1234")?).await?;
    assert!(created.id > 0);
    assert_eq!(created.name, "Bell");
    assert_eq!(created.pin, 1234);
    assert!(created.created_at >= before);

    let second = user::insert(&db, user::NewUser::parse("Ada", "0042")?).await?;
    assert!(second.id > created.id);
    assert_eq!(second.pin, 42);
    Ok(())
}

#[tokio::test]
async fn list_and_find_use_summary_projection() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let a = user::insert(&db, user::NewUser::parse("Test User", "1234")?).await?;
    let b = user::insert(&db, user::NewUser::parse("Test User2", "1234")?).await?;

    let all = user::list(&db).await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, a.id);
    assert_eq!(all[0].name, "Test User");
    assert_eq!(all[1].id, b.id);
    assert_eq!(all[1].created_at, b.created_at);

    let found = user::find_summary(&db, b.id).await?.expect("user b");
    assert_eq!(found.name, "Test User2");
    assert!(user::find_summary(&db, 99_999_999).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn snippet_requires_existing_user() -> anyhow::Result<()> {
    let db = setup_test_db().await?;

    let orphan = snippet::ActiveModel {
        user_id: Set(4242),
        snippet: Set("fn main() {}".into()),
        language: Set("rust".into()),
        ..Default::default()
    };
    assert!(orphan.insert(&db).await.is_err());

    let owner = user::insert(&db, user::NewUser::parse("Owner", "9999")?).await?;
    let owned = snippet::ActiveModel {
        user_id: Set(owner.id),
        snippet: Set("print('hi')".into()),
        language: Set("python".into()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert_eq!(owned.user_id, owner.id);
    assert!(owned.deleted_at.is_none());
    assert!(owned.updated_at.is_none());

    let with_owner = snippet::Entity::find_by_id(owned.id)
        .find_also_related(user::Entity)
        .one(&db)
        .await?
        .expect("snippet row");
    assert_eq!(with_owner.1.map(|u| u.id), Some(owner.id));
    Ok(())
}
