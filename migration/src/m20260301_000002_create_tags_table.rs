use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(big_integer(Tags::GuildId))
                    .col(string(Tags::TagName))
                    .col(big_integer(Tags::TagOwner))
                    .col(text(Tags::TagContent))
                    .col(integer(Tags::Uses).default(0))
                    .primary_key(Index::create().col(Tags::GuildId).col(Tags::TagName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tags {
    Table,
    GuildId,
    TagName,
    TagOwner,
    TagContent,
    Uses,
}
