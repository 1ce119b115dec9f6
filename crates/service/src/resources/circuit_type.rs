use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter, Set};
use serde::Deserialize;

use models::{circuit, circuit_type};

use crate::crud::{ensure_unique, Resource};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CircuitTypeInput {
    pub name: String,
    pub slug: String,
}

pub struct CircuitTypeResource;

#[async_trait]
impl Resource for CircuitTypeResource {
    type Entity = circuit_type::Entity;
    type Model = circuit_type::Model;
    type ActiveModel = circuit_type::ActiveModel;
    type Input = CircuitTypeInput;

    const NAME: &'static str = "circuit type";

    fn id_column() -> circuit_type::Column {
        circuit_type::Column::Id
    }

    fn id_of(model: &circuit_type::Model) -> i32 {
        model.id
    }

    async fn validate(txn: &DatabaseTransaction, input: &CircuitTypeInput, current: Option<i32>) -> Result<(), ServiceError> {
        circuit_type::validate_name(&input.name)?;
        models::validate::slug("slug", &input.slug)?;
        ensure_unique::<circuit_type::Entity, _>(txn, circuit_type::Column::Name, circuit_type::Column::Id, &input.name, current, Self::NAME).await?;
        ensure_unique::<circuit_type::Entity, _>(txn, circuit_type::Column::Slug, circuit_type::Column::Id, &input.slug, current, Self::NAME).await?;
        Ok(())
    }

    fn into_active_model(input: CircuitTypeInput) -> circuit_type::ActiveModel {
        circuit_type::ActiveModel {
            name: Set(input.name),
            slug: Set(input.slug),
            ..Default::default()
        }
    }

    async fn before_delete(txn: &DatabaseTransaction, id: i32) -> Result<(), ServiceError> {
        let refs = circuit::Entity::find()
            .filter(circuit::Column::TypeId.eq(id))
            .count(txn)
            .await?;
        if refs > 0 {
            return Err(ServiceError::Conflict(format!("circuit type {id} is referenced by {refs} circuit(s)")));
        }
        Ok(())
    }
}
