use sea_orm_migration::{prelude::*, schema::*};

/// Prefix assigned to guilds that never configured one.
const DEFAULT_PREFIX: &str = "$";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guilds::Table)
                    .if_not_exists()
                    .col(big_integer(Guilds::GuildId).primary_key())
                    .col(string_len(Guilds::Prefix, 3).default(DEFAULT_PREFIX))
                    .col(big_integer_null(Guilds::StarChannel))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guilds::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guilds {
    Table,
    GuildId,
    Prefix,
    StarChannel,
}
