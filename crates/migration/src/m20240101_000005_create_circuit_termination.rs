use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CircuitTermination::Table)
                    .if_not_exists()
                    .col(pk_auto(CircuitTermination::Id))
                    .col(integer(CircuitTermination::CircuitId))
                    .col(string_len(CircuitTermination::TermSide, 1))
                    .col(integer(CircuitTermination::SiteId))
                    .col(integer(CircuitTermination::PortSpeed))
                    .col(integer_null(CircuitTermination::UpstreamSpeed))
                    .col(string_len(CircuitTermination::XconnectId, 50))
                    .col(string_len(CircuitTermination::PpInfo, 100))
                    .col(timestamp_with_time_zone(CircuitTermination::CreatedAt))
                    .col(timestamp_with_time_zone(CircuitTermination::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_termination_circuit")
                            .from(CircuitTermination::Table, CircuitTermination::CircuitId)
                            .to(Circuit::Table, Circuit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_termination_site")
                            .from(CircuitTermination::Table, CircuitTermination::SiteId)
                            .to(Site::Table, Site::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CircuitTermination::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CircuitTermination {
    Table,
    Id,
    CircuitId,
    TermSide,
    SiteId,
    PortSpeed,
    UpstreamSpeed,
    XconnectId,
    PpInfo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Circuit { Table, Id }

#[derive(DeriveIden)]
enum Site { Table, Id }
