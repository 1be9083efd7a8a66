use sea_orm::{entity::prelude::*, DatabaseConnection, FromQueryResult, QueryOrder, QuerySelect, Select, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::snippet;

pub const PIN_LEN: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "PascalCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    pub pin: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Snippet,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Snippet => Entity::has_many(snippet::Entity).into() }
    }
}

impl Related<snippet::Entity> for Entity {
    fn to() -> RelationDef { Relation::Snippet.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Projection used by the read endpoints; the pin never leaves the database here.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserSummary {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    pub created_at: DateTime,
}

/// A validated user ready to be inserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    pin: i32,
}

impl NewUser {
    /// Validates in order: name first, then pin.
    pub fn parse(name: &str, pin: &str) -> Result<Self, ModelError> {
        let name = validate_name(name)?;
        let pin = validate_pin(pin)?;
        Ok(Self { name: name.to_string(), pin })
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn pin(&self) -> i32 { self.pin }
}

/// Returns the trimmed name.
pub fn validate_name(name: &str) -> Result<&str, ModelError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation("Name is required".into()));
    }
    Ok(trimmed)
}

/// Exactly four ASCII digits. Leading zeros are accepted and dropped by the
/// integer conversion ("0123" -> 123).
pub fn validate_pin(pin: &str) -> Result<i32, ModelError> {
    let invalid = || ModelError::Validation("4 digit PIN required".into());
    if pin.len() != PIN_LEN || !pin.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    pin.parse::<i32>().map_err(|_| invalid())
}

fn summaries() -> Select<Entity> {
    Entity::find()
        .select_only()
        .columns([Column::Id, Column::Name, Column::CreatedAt])
}

/// All users in insertion order, without pins.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<UserSummary>, ModelError> {
    let users = summaries()
        .order_by_asc(Column::Id)
        .into_model::<UserSummary>()
        .all(db)
        .await?;
    Ok(users)
}

pub async fn find_summary(db: &DatabaseConnection, id: i64) -> Result<Option<UserSummary>, ModelError> {
    let found = summaries()
        .filter(Column::Id.eq(id))
        .into_model::<UserSummary>()
        .one(db)
        .await?;
    Ok(found)
}

/// Insert and read back the stored row in one `INSERT ... RETURNING` statement.
pub async fn insert(db: &DatabaseConnection, new_user: NewUser) -> Result<Model, ModelError> {
    let am = ActiveModel {
        name: Set(new_user.name),
        pin: Set(new_user.pin),
        ..Default::default()
    };
    let created = Entity::insert(am).exec_with_returning(db).await?;
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(validate_name("  Bell \t").unwrap(), "Bell");
    }

    #[test]
    fn blank_name_rejected() {
        for name in ["", "   ", "\n\t"] {
            let err = validate_name(name).unwrap_err();
            assert!(matches!(err, ModelError::Validation(ref m) if m == "Name is required"));
        }
    }

    #[test]
    fn pin_must_be_four_digits() {
        assert_eq!(validate_pin("1234").unwrap(), 1234);
        assert_eq!(validate_pin("0123").unwrap(), 123);
        for pin in ["", "1", "123", "12345", "abc", "abcd", "12a4", " 123", "１２３４"] {
            let err = validate_pin(pin).unwrap_err();
            assert!(matches!(err, ModelError::Validation(ref m) if m == "4 digit PIN required"), "{pin:?}");
        }
    }

    #[test]
    fn name_checked_before_pin() {
        let err = NewUser::parse(" ", "x").unwrap_err();
        assert_eq!(err.to_string(), "validation error: Name is required");
        let ok = NewUser::parse(" Bell ", "4321").unwrap();
        assert_eq!(ok.name(), "Bell");
        assert_eq!(ok.pin(), 4321);
    }

    #[test]
    fn model_serializes_with_wire_names() {
        let created_at = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let m = Model { id: 7, name: "Bell".into(), pin: 1234, created_at };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["ID"], 7);
        assert_eq!(json["Name"], "Bell");
        assert_eq!(json["Pin"], 1234);
        assert_eq!(json["CreatedAt"], "2024-01-02T03:04:05");

        let s = UserSummary { id: 7, name: "Bell".into(), created_at };
        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("Pin").is_none());
        assert_eq!(json["ID"], 7);
    }
}
