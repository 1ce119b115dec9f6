use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use tracing::debug;

use models::{circuit, circuit_termination, circuit_type, provider};

use crate::crud::{ensure_exists, Resource};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CircuitInput {
    pub cid: String,
    #[serde(alias = "provider_id")]
    pub provider: i32,
    #[serde(rename = "type", alias = "type_id")]
    pub circuit_type: i32,
    #[serde(default)]
    pub install_date: Option<NaiveDate>,
    #[serde(default)]
    pub commit_rate: Option<i32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
}

pub struct CircuitResource;

#[async_trait]
impl Resource for CircuitResource {
    type Entity = circuit::Entity;
    type Model = circuit::Model;
    type ActiveModel = circuit::ActiveModel;
    type Input = CircuitInput;

    const NAME: &'static str = "circuit";

    fn id_column() -> circuit::Column {
        circuit::Column::Id
    }

    fn id_of(model: &circuit::Model) -> i32 {
        model.id
    }

    async fn validate(txn: &DatabaseTransaction, input: &CircuitInput, current: Option<i32>) -> Result<(), ServiceError> {
        circuit::validate_cid(&input.cid)?;
        circuit::validate_commit_rate(input.commit_rate)?;
        circuit::validate_description(&input.description)?;
        ensure_exists::<provider::Entity, _>(txn, provider::Column::Id, input.provider, "provider").await?;
        ensure_exists::<circuit_type::Entity, _>(txn, circuit_type::Column::Id, input.circuit_type, "type").await?;

        let mut dup = circuit::Entity::find()
            .filter(circuit::Column::ProviderId.eq(input.provider))
            .filter(circuit::Column::Cid.eq(input.cid.as_str()));
        if let Some(id) = current {
            dup = dup.filter(circuit::Column::Id.ne(id));
        }
        if dup.one(txn).await?.is_some() {
            return Err(ServiceError::Validation(format!(
                "cid: circuit {} already exists for provider {}",
                input.cid, input.provider
            )));
        }
        Ok(())
    }

    fn into_active_model(input: CircuitInput) -> circuit::ActiveModel {
        circuit::ActiveModel {
            cid: Set(input.cid),
            provider_id: Set(input.provider),
            type_id: Set(input.circuit_type),
            install_date: Set(input.install_date),
            commit_rate: Set(input.commit_rate),
            description: Set(input.description),
            comments: Set(input.comments),
            ..Default::default()
        }
    }

    /// Terminations belong to their circuit and go with it.
    async fn before_delete(txn: &DatabaseTransaction, id: i32) -> Result<(), ServiceError> {
        let res = circuit_termination::Entity::delete_many()
            .filter(circuit_termination::Column::CircuitId.eq(id))
            .exec(txn)
            .await?;
        debug!(circuit = id, removed = res.rows_affected, "circuit terminations removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_relation_names_and_id_aliases() {
        let a: CircuitInput = serde_json::from_str(r#"{"cid":"TEST0004","provider":1,"type":2}"#).unwrap();
        let b: CircuitInput = serde_json::from_str(r#"{"cid":"TEST0004","provider_id":1,"type_id":2}"#).unwrap();
        assert_eq!((a.provider, a.circuit_type), (1, 2));
        assert_eq!((b.provider, b.circuit_type), (1, 2));
        assert!(a.install_date.is_none());
    }

    #[test]
    fn missing_required_field_fails_to_parse() {
        assert!(serde_json::from_str::<CircuitInput>(r#"{"cid":"TEST0004","provider":1}"#).is_err());
    }
}
