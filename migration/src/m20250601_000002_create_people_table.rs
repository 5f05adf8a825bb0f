use sea_orm_migration::{prelude::*, schema::*};

static IDX_PEOPLE_SANITY_ID: &str = "idx-people-sanity_id";
static IDX_PEOPLE_PLAYER_POSITION: &str = "idx-people-player_position";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(string(People::Id).primary_key())
                    .col(string(People::Name))
                    .col(string_null(People::FirstName))
                    .col(string_null(People::LastName))
                    .col(string(People::Position))
                    .col(string_null(People::PlayerPosition))
                    .col(string_null(People::StaffRole))
                    .col(string_null(People::Nationality))
                    .col(integer_null(People::JerseyNumber))
                    .col(string_null(People::ImageUrl))
                    .col(string_null(People::SanityId))
                    .col(timestamp(People::CreatedAt))
                    .col(timestamp(People::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PEOPLE_SANITY_ID)
                    .table(People::Table)
                    .col(People::SanityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PEOPLE_PLAYER_POSITION)
                    .table(People::Table)
                    .col(People::PlayerPosition)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PEOPLE_PLAYER_POSITION)
                    .table(People::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PEOPLE_SANITY_ID)
                    .table(People::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum People {
    Table,
    Id,
    Name,
    FirstName,
    LastName,
    Position,
    PlayerPosition,
    StaffRole,
    Nationality,
    JerseyNumber,
    ImageUrl,
    SanityId,
    CreatedAt,
    UpdatedAt,
}
