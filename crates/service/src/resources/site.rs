use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter, Set};
use serde::Deserialize;

use models::{circuit_termination, site};

use crate::crud::{ensure_unique, Resource};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteInput {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub facility: String,
    #[serde(default)]
    pub comments: String,
}

pub struct SiteResource;

#[async_trait]
impl Resource for SiteResource {
    type Entity = site::Entity;
    type Model = site::Model;
    type ActiveModel = site::ActiveModel;
    type Input = SiteInput;

    const NAME: &'static str = "site";

    fn id_column() -> site::Column {
        site::Column::Id
    }

    fn id_of(model: &site::Model) -> i32 {
        model.id
    }

    async fn validate(txn: &DatabaseTransaction, input: &SiteInput, current: Option<i32>) -> Result<(), ServiceError> {
        site::validate_name(&input.name)?;
        models::validate::slug("slug", &input.slug)?;
        site::validate_facility(&input.facility)?;
        ensure_unique::<site::Entity, _>(txn, site::Column::Name, site::Column::Id, &input.name, current, Self::NAME).await?;
        ensure_unique::<site::Entity, _>(txn, site::Column::Slug, site::Column::Id, &input.slug, current, Self::NAME).await?;
        Ok(())
    }

    fn into_active_model(input: SiteInput) -> site::ActiveModel {
        site::ActiveModel {
            name: Set(input.name),
            slug: Set(input.slug),
            facility: Set(input.facility),
            comments: Set(input.comments),
            ..Default::default()
        }
    }

    async fn before_delete(txn: &DatabaseTransaction, id: i32) -> Result<(), ServiceError> {
        let refs = circuit_termination::Entity::find()
            .filter(circuit_termination::Column::SiteId.eq(id))
            .count(txn)
            .await?;
        if refs > 0 {
            return Err(ServiceError::Conflict(format!("site {id} is referenced by {refs} circuit termination(s)")));
        }
        Ok(())
    }
}
