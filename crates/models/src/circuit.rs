use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{circuit_termination, circuit_type, errors::ModelError, provider, validate};

/// A transport link purchased from a provider, identified by its `cid`.
///
/// Foreign keys serialize under the relation name (`provider`, `type`) so a
/// record read back has the same shape as the payload that created it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "circuit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cid: String,
    #[serde(rename = "provider")]
    pub provider_id: i32,
    #[serde(rename = "type")]
    pub type_id: i32,
    pub install_date: Option<Date>,
    pub commit_rate: Option<i32>,
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub comments: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Provider, CircuitType, CircuitTermination }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Provider => Entity::belongs_to(provider::Entity)
                .from(Column::ProviderId)
                .to(provider::Column::Id)
                .into(),
            Relation::CircuitType => Entity::belongs_to(circuit_type::Entity)
                .from(Column::TypeId)
                .to(circuit_type::Column::Id)
                .into(),
            Relation::CircuitTermination => Entity::has_many(circuit_termination::Entity).into(),
        }
    }
}

impl Related<provider::Entity> for Entity {
    fn to() -> RelationDef { Relation::Provider.def() }
}

impl Related<circuit_type::Entity> for Entity {
    fn to() -> RelationDef { Relation::CircuitType.def() }
}

impl Related<circuit_termination::Entity> for Entity {
    fn to() -> RelationDef { Relation::CircuitTermination.def() }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        crate::stamp(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}

pub fn validate_cid(cid: &str) -> Result<(), ModelError> {
    validate::required_text("cid", cid, 50)
}

pub fn validate_commit_rate(rate: Option<i32>) -> Result<(), ModelError> {
    match rate {
        Some(r) => validate::positive("commit_rate", r),
        None => Ok(()),
    }
}

pub fn validate_description(description: &str) -> Result<(), ModelError> {
    validate::max_len("description", description, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_foreign_keys_under_relation_names() {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        let m = Model {
            id: 1,
            cid: "TEST0001".into(),
            provider_id: 2,
            type_id: 3,
            install_date: None,
            commit_rate: None,
            description: String::new(),
            comments: String::new(),
            created_at: now,
            updated_at: now,
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["provider"], 2);
        assert_eq!(v["type"], 3);
        assert!(v.get("provider_id").is_none());
    }

    #[test]
    fn commit_rate_must_be_positive_when_present() {
        assert!(validate_commit_rate(None).is_ok());
        assert!(validate_commit_rate(Some(0)).is_err());
        assert!(validate_commit_rate(Some(10_000)).is_ok());
    }
}
