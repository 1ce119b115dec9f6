use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Circuit: cid is unique per provider
        manager
            .create_index(
                Index::create()
                    .name("uniq_circuit_provider_cid")
                    .table(Circuit::Table)
                    .col(Circuit::ProviderId)
                    .col(Circuit::Cid)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_circuit_type")
                    .table(Circuit::Table)
                    .col(Circuit::TypeId)
                    .to_owned(),
            )
            .await?;

        // CircuitTermination: one termination per side of a circuit
        manager
            .create_index(
                Index::create()
                    .name("uniq_termination_circuit_side")
                    .table(CircuitTermination::Table)
                    .col(CircuitTermination::CircuitId)
                    .col(CircuitTermination::TermSide)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_termination_site")
                    .table(CircuitTermination::Table)
                    .col(CircuitTermination::SiteId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "uniq_circuit_provider_cid",
            "idx_circuit_type",
            "uniq_termination_circuit_side",
            "idx_termination_site",
        ] {
            manager.drop_index(Index::drop().name(name).to_owned()).await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Circuit { Table, ProviderId, TypeId, Cid }

#[derive(DeriveIden)]
enum CircuitTermination { Table, CircuitId, SiteId, TermSide }
