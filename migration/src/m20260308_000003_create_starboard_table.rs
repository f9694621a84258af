use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Starboard::Table)
                    .if_not_exists()
                    .col(big_integer(Starboard::BaseMessageId).primary_key())
                    .col(big_integer(Starboard::GuildId))
                    .col(integer(Starboard::Stars).default(1))
                    .col(big_integer_null(Starboard::StarMessageId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_starboard_guild_id")
                    .table(Starboard::Table)
                    .col(Starboard::GuildId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Starboard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Starboard {
    Table,
    BaseMessageId,
    GuildId,
    Stars,
    StarMessageId,
}
