use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::debug;

use models::user::{self, NewUser, UserSummary};
use crate::errors::ServiceError;

pub const USER_NOT_FOUND: &str = "User not found.";

/// Body of `POST /users`. Unknown fields are rejected; a missing field
/// decodes as an empty string and then fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CreateUserInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pin: String,
}

/// List every user, pins excluded.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<UserSummary>, ServiceError> {
    let users = user::list(db).await?;
    debug!(count = users.len(), "listed users");
    Ok(users)
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: i64) -> Result<UserSummary, ServiceError> {
    user::find_summary(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(USER_NOT_FOUND.to_string()))
}

/// Validate and insert a new user, returning the stored row.
pub async fn create_user(db: &DatabaseConnection, input: CreateUserInput) -> Result<user::Model, ServiceError> {
    let new_user = NewUser::parse(&input.name, &input.pin)?;
    let created = user::insert(db, new_user).await?;
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn input(name: &str, pin: &str) -> CreateUserInput {
        CreateUserInput { name: name.into(), pin: pin.into() }
    }

    #[tokio::test]
    async fn user_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        assert!(list_users(&db).await?.is_empty());

        let u = create_user(&db, input("  Bell  ", "1234")).await?;
        assert_eq!(u.name, "Bell");
        assert_eq!(u.pin, 1234);
        assert_ne!(u.id, 0);

        let found = get_user(&db, u.id).await?;
        assert_eq!(found.id, u.id);
        assert_eq!(found.name, "Bell");
        assert_eq!(found.created_at, u.created_at);

        // reads are stable without intervening writes
        assert_eq!(get_user(&db, u.id).await?, found);

        let missing = get_user(&db, u.id + 1000).await.unwrap_err();
        assert!(matches!(&missing, ServiceError::NotFound(msg) if msg == USER_NOT_FOUND));
        assert_eq!(missing.to_string(), "User not found.");
        Ok(())
    }

    #[tokio::test]
    async fn created_ids_listed_exactly_once() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(create_user(&db, input(&format!("User {i}"), "1000")).await?.id);
        }
        let listed = list_users(&db).await?;
        assert!(listed.len() >= ids.len());
        for id in ids {
            assert_eq!(listed.iter().filter(|u| u.id == id).count(), 1);
        }
        Ok(())
    }

    #[tokio::test]
    async fn validation_fails_before_insert() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for (name, pin, msg) in [
            ("   ", "1234", "Name is required"),
            ("", "", "Name is required"),
            ("bell", "", "4 digit PIN required"),
            ("bell", "abc", "4 digit PIN required"),
            ("bell", "12345", "4 digit PIN required"),
        ] {
            match create_user(&db, input(name, pin)).await {
                Err(ServiceError::Validation(m)) => assert_eq!(m, msg),
                other => panic!("expected validation error for {name:?}/{pin:?}, got {other:?}"),
            }
        }
        assert!(list_users(&db).await?.is_empty());
        Ok(())
    }

    #[test]
    fn create_input_is_strict() {
        let ok: CreateUserInput = serde_json::from_str(r#"{"Name":"Bell","Pin":"1234"}"#).unwrap();
        assert_eq!(ok, input("Bell", "1234"));

        let partial: CreateUserInput = serde_json::from_str(r#"{"Name":"bell"}"#).unwrap();
        assert_eq!(partial.pin, "");

        assert!(serde_json::from_str::<CreateUserInput>(r#"{"Name":"bell","Pin":"1234","extra":"973"}"#).is_err());
        assert!(serde_json::from_str::<CreateUserInput>(r#"{"Name":"bell","Pin":1234}"#).is_err());
        assert!(serde_json::from_str::<CreateUserInput>("").is_err());
    }
}
