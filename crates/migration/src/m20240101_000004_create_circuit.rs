use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Circuit::Table)
                    .if_not_exists()
                    .col(pk_auto(Circuit::Id))
                    .col(string_len(Circuit::Cid, 50))
                    .col(integer(Circuit::ProviderId))
                    .col(integer(Circuit::TypeId))
                    .col(date_null(Circuit::InstallDate))
                    .col(integer_null(Circuit::CommitRate))
                    .col(string_len(Circuit::Description, 100))
                    .col(text(Circuit::Comments))
                    .col(timestamp_with_time_zone(Circuit::CreatedAt))
                    .col(timestamp_with_time_zone(Circuit::UpdatedAt))
                    // Providers and types stay while circuits point at them.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_circuit_provider")
                            .from(Circuit::Table, Circuit::ProviderId)
                            .to(Provider::Table, Provider::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_circuit_type")
                            .from(Circuit::Table, Circuit::TypeId)
                            .to(CircuitType::Table, CircuitType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Circuit::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Circuit {
    Table,
    Id,
    Cid,
    ProviderId,
    TypeId,
    InstallDate,
    CommitRate,
    Description,
    Comments,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Provider { Table, Id }

#[derive(DeriveIden)]
enum CircuitType { Table, Id }
