use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Site::Table)
                    .if_not_exists()
                    .col(pk_auto(Site::Id))
                    .col(string_len_uniq(Site::Name, 50))
                    .col(string_len_uniq(Site::Slug, 50))
                    .col(string_len(Site::Facility, 50))
                    .col(text(Site::Comments))
                    .col(timestamp_with_time_zone(Site::CreatedAt))
                    .col(timestamp_with_time_zone(Site::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Site::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Site { Table, Id, Name, Slug, Facility, Comments, CreatedAt, UpdatedAt }
