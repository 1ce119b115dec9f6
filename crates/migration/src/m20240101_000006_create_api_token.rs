use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApiToken::Table)
                    .if_not_exists()
                    .col(pk_auto(ApiToken::Id))
                    .col(string_len_uniq(ApiToken::Key, 40))
                    .col(string_len(ApiToken::User, 150))
                    .col(boolean(ApiToken::WriteEnabled))
                    .col(timestamp_with_time_zone_null(ApiToken::Expires))
                    .col(string_len(ApiToken::Description, 100))
                    .col(timestamp_with_time_zone(ApiToken::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ApiToken::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ApiToken {
    Table,
    Id,
    Key,
    User,
    WriteEnabled,
    Expires,
    Description,
    CreatedAt,
}
