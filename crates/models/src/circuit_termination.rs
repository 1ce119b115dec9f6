use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{circuit, errors::ModelError, site, validate};

/// Which end of a circuit a termination describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum TermSide {
    #[sea_orm(string_value = "A")]
    #[serde(rename = "A")]
    A,
    #[sea_orm(string_value = "Z")]
    #[serde(rename = "Z")]
    Z,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "circuit_termination")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "circuit")]
    pub circuit_id: i32,
    pub term_side: TermSide,
    #[serde(rename = "site")]
    pub site_id: i32,
    /// Port speed in Kbps.
    pub port_speed: i32,
    pub upstream_speed: Option<i32>,
    pub xconnect_id: String,
    pub pp_info: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Circuit, Site }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Circuit => Entity::belongs_to(circuit::Entity)
                .from(Column::CircuitId)
                .to(circuit::Column::Id)
                .into(),
            Relation::Site => Entity::belongs_to(site::Entity)
                .from(Column::SiteId)
                .to(site::Column::Id)
                .into(),
        }
    }
}

impl Related<circuit::Entity> for Entity {
    fn to() -> RelationDef { Relation::Circuit.def() }
}

impl Related<site::Entity> for Entity {
    fn to() -> RelationDef { Relation::Site.def() }
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

pub fn validate_port_speed(speed: i32) -> Result<(), ModelError> {
    validate::positive("port_speed", speed)
}

pub fn validate_upstream_speed(speed: Option<i32>) -> Result<(), ModelError> {
    match speed {
        Some(s) => validate::positive("upstream_speed", s),
        None => Ok(()),
    }
}

pub fn validate_xconnect_id(xconnect_id: &str) -> Result<(), ModelError> {
    validate::max_len("xconnect_id", xconnect_id, 50)
}

pub fn validate_pp_info(pp_info: &str) -> Result<(), ModelError> {
    validate::max_len("pp_info", pp_info, 100)
}
