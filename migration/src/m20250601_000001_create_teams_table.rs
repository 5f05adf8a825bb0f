use sea_orm_migration::{prelude::*, schema::*};

static IDX_TEAMS_SANITY_ID: &str = "idx-teams-sanity_id";
static IDX_TEAMS_NAME: &str = "idx-teams-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(string(Teams::Id).primary_key())
                    .col(string(Teams::Name))
                    .col(string_null(Teams::ShortName))
                    .col(string_null(Teams::LogoUrl))
                    .col(string_null(Teams::SanityId))
                    .col(timestamp(Teams::CreatedAt))
                    .col(timestamp(Teams::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAMS_SANITY_ID)
                    .table(Teams::Table)
                    .col(Teams::SanityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAMS_NAME)
                    .table(Teams::Table)
                    .col(Teams::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_TEAMS_NAME).table(Teams::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAMS_SANITY_ID)
                    .table(Teams::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Teams {
    Table,
    Id,
    Name,
    ShortName,
    LogoUrl,
    SanityId,
    CreatedAt,
    UpdatedAt,
}
