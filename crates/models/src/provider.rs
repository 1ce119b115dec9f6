use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{circuit, errors::ModelError, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "provider")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub asn: Option<i64>,
    pub account: String,
    pub portal_url: String,
    #[sea_orm(column_type = "Text")]
    pub noc_contact: String,
    #[sea_orm(column_type = "Text")]
    pub admin_contact: String,
    #[sea_orm(column_type = "Text")]
    pub comments: String,
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

pub const ASN_MAX: i64 = 4_294_967_295;

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    validate::required_text("name", name, 50)
}

pub fn validate_asn(asn: Option<i64>) -> Result<(), ModelError> {
    match asn {
        Some(a) if !(1..=ASN_MAX).contains(&a) => {
            Err(ModelError::invalid("asn", format!("ASN must be between 1 and {ASN_MAX}")))
        }
        _ => Ok(()),
    }
}

pub fn validate_account(account: &str) -> Result<(), ModelError> {
    validate::max_len("account", account, 30)
}

pub fn validate_portal_url(url: &str) -> Result<(), ModelError> {
    if url.is_empty() {
        return Ok(());
    }
    validate::max_len("portal_url", url, 200)?;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ModelError::invalid("portal_url", "enter a valid URL"));
    }
    Ok(())
}
