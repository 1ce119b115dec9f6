use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{circuit, errors::ModelError, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "circuit_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Circuit }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Circuit => Entity::has_many(circuit::Entity).into(),
        }
    }
}

impl Related<circuit::Entity> for Entity {
    fn to() -> RelationDef { Relation::Circuit.def() }
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
