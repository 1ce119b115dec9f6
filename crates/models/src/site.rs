use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{circuit_termination, errors::ModelError, validate};

/// Physical location a circuit terminates at.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub facility: String,
    #[sea_orm(column_type = "Text")]
    pub comments: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { CircuitTermination }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::CircuitTermination => Entity::has_many(circuit_termination::Entity).into(),
        }
    }
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

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    validate::required_text("name", name, 50)
}

pub fn validate_facility(facility: &str) -> Result<(), ModelError> {
    validate::max_len("facility", facility, 50)
}
