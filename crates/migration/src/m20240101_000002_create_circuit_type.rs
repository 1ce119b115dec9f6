use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CircuitType::Table)
                    .if_not_exists()
                    .col(pk_auto(CircuitType::Id))
                    .col(string_len_uniq(CircuitType::Name, 50))
                    .col(string_len_uniq(CircuitType::Slug, 50))
                    .col(timestamp_with_time_zone(CircuitType::CreatedAt))
                    .col(timestamp_with_time_zone(CircuitType::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CircuitType::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CircuitType { Table, Id, Name, Slug, CreatedAt, UpdatedAt }
