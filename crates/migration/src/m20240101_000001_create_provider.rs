use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Provider::Table)
                    .if_not_exists()
                    .col(pk_auto(Provider::Id))
                    .col(string_len_uniq(Provider::Name, 50))
                    .col(string_len_uniq(Provider::Slug, 50))
                    .col(big_integer_null(Provider::Asn))
                    .col(string_len(Provider::Account, 30))
                    .col(string_len(Provider::PortalUrl, 200))
                    .col(text(Provider::NocContact))
                    .col(text(Provider::AdminContact))
                    .col(text(Provider::Comments))
                    .col(timestamp_with_time_zone(Provider::CreatedAt))
                    .col(timestamp_with_time_zone(Provider::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Provider::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Provider {
    Table,
    Id,
    Name,
    Slug,
    Asn,
    Account,
    PortalUrl,
    NocContact,
    AdminContact,
    Comments,
    CreatedAt,
    UpdatedAt,
}
