use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, Set};
use serde::Deserialize;

use models::circuit_termination::{self, TermSide};
use models::{circuit, site};

use crate::crud::{ensure_exists, Resource};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CircuitTerminationInput {
    #[serde(alias = "circuit_id")]
    pub circuit: i32,
    pub term_side: TermSide,
    #[serde(alias = "site_id")]
    pub site: i32,
    pub port_speed: i32,
    #[serde(default)]
    pub upstream_speed: Option<i32>,
    #[serde(default)]
    pub xconnect_id: String,
    #[serde(default)]
    pub pp_info: String,
}

pub struct CircuitTerminationResource;

#[async_trait]
impl Resource for CircuitTerminationResource {
    type Entity = circuit_termination::Entity;
    type Model = circuit_termination::Model;
    type ActiveModel = circuit_termination::ActiveModel;
    type Input = CircuitTerminationInput;

    const NAME: &'static str = "circuit termination";

    fn id_column() -> circuit_termination::Column {
        circuit_termination::Column::Id
    }

    fn id_of(model: &circuit_termination::Model) -> i32 {
        model.id
    }

    async fn validate(
        txn: &DatabaseTransaction,
        input: &CircuitTerminationInput,
        current: Option<i32>,
    ) -> Result<(), ServiceError> {
        circuit_termination::validate_port_speed(input.port_speed)?;
        circuit_termination::validate_upstream_speed(input.upstream_speed)?;
        circuit_termination::validate_xconnect_id(&input.xconnect_id)?;
        circuit_termination::validate_pp_info(&input.pp_info)?;
        ensure_exists::<circuit::Entity, _>(txn, circuit::Column::Id, input.circuit, "circuit").await?;
        ensure_exists::<site::Entity, _>(txn, site::Column::Id, input.site, "site").await?;

        let mut taken = circuit_termination::Entity::find()
            .filter(circuit_termination::Column::CircuitId.eq(input.circuit))
            .filter(circuit_termination::Column::TermSide.eq(input.term_side));
        if let Some(id) = current {
            taken = taken.filter(circuit_termination::Column::Id.ne(id));
        }
        if taken.one(txn).await?.is_some() {
            let side = match input.term_side {
                TermSide::A => "A",
                TermSide::Z => "Z",
            };
            return Err(ServiceError::Validation(format!(
                "term_side: circuit {} already has a termination on side {side}",
                input.circuit
            )));
        }
        Ok(())
    }

    fn into_active_model(input: CircuitTerminationInput) -> circuit_termination::ActiveModel {
        circuit_termination::ActiveModel {
            circuit_id: Set(input.circuit),
            term_side: Set(input.term_side),
            site_id: Set(input.site),
            port_speed: Set(input.port_speed),
            upstream_speed: Set(input.upstream_speed),
            xconnect_id: Set(input.xconnect_id),
            pp_info: Set(input.pp_info),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_side_outside_a_z_is_rejected() {
        let ok = r#"{"circuit":1,"term_side":"Z","site":1,"port_speed":1000000}"#;
        assert_eq!(serde_json::from_str::<CircuitTerminationInput>(ok).unwrap().term_side, TermSide::Z);
        let bad = r#"{"circuit":1,"term_side":"B","site":1,"port_speed":1000000}"#;
        assert!(serde_json::from_str::<CircuitTerminationInput>(bad).is_err());
    }
}
