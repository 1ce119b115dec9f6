use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter, Set};
use serde::Deserialize;

use models::{circuit, provider};

use crate::crud::{ensure_unique, Resource};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderInput {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub asn: Option<i64>,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub portal_url: String,
    #[serde(default)]
    pub noc_contact: String,
    #[serde(default)]
    pub admin_contact: String,
    #[serde(default)]
    pub comments: String,
}

pub struct ProviderResource;

#[async_trait]
impl Resource for ProviderResource {
    type Entity = provider::Entity;
    type Model = provider::Model;
    type ActiveModel = provider::ActiveModel;
    type Input = ProviderInput;

    const NAME: &'static str = "provider";

    fn id_column() -> provider::Column {
        provider::Column::Id
    }

    fn id_of(model: &provider::Model) -> i32 {
        model.id
    }

    async fn validate(txn: &DatabaseTransaction, input: &ProviderInput, current: Option<i32>) -> Result<(), ServiceError> {
        provider::validate_name(&input.name)?;
        models::validate::slug("slug", &input.slug)?;
        provider::validate_asn(input.asn)?;
        provider::validate_account(&input.account)?;
        provider::validate_portal_url(&input.portal_url)?;
        ensure_unique::<provider::Entity, _>(txn, provider::Column::Name, provider::Column::Id, &input.name, current, Self::NAME).await?;
        ensure_unique::<provider::Entity, _>(txn, provider::Column::Slug, provider::Column::Id, &input.slug, current, Self::NAME).await?;
        Ok(())
    }

    fn into_active_model(input: ProviderInput) -> provider::ActiveModel {
        provider::ActiveModel {
            name: Set(input.name),
            slug: Set(input.slug),
            asn: Set(input.asn),
            account: Set(input.account),
            portal_url: Set(input.portal_url),
            noc_contact: Set(input.noc_contact),
            admin_contact: Set(input.admin_contact),
            comments: Set(input.comments),
            ..Default::default()
        }
    }

    async fn before_delete(txn: &DatabaseTransaction, id: i32) -> Result<(), ServiceError> {
        let refs = circuit::Entity::find()
            .filter(circuit::Column::ProviderId.eq(id))
            .count(txn)
            .await?;
        if refs > 0 {
            return Err(ServiceError::Conflict(format!("provider {id} is referenced by {refs} circuit(s)")));
        }
        Ok(())
    }
}
