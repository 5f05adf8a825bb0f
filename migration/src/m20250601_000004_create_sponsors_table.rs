use sea_orm_migration::{prelude::*, schema::*};

static IDX_SPONSORS_SANITY_ID: &str = "idx-sponsors-sanity_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sponsors::Table)
                    .if_not_exists()
                    .col(string(Sponsors::Id).primary_key())
                    .col(string(Sponsors::Name))
                    .col(string_null(Sponsors::Website))
                    .col(string_null(Sponsors::Tier))
                    .col(boolean(Sponsors::Featured).default(false))
                    .col(string_null(Sponsors::LogoUrl))
                    .col(string_null(Sponsors::SanityId))
                    .col(timestamp(Sponsors::CreatedAt))
                    .col(timestamp(Sponsors::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SPONSORS_SANITY_ID)
                    .table(Sponsors::Table)
                    .col(Sponsors::SanityId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SPONSORS_SANITY_ID)
                    .table(Sponsors::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Sponsors::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Sponsors {
    Table,
    Id,
    Name,
    Website,
    Tier,
    Featured,
    LogoUrl,
    SanityId,
    CreatedAt,
    UpdatedAt,
}
