use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_create_teams_table::Teams;

static IDX_MATCH_SANITY_ID: &str = "idx-match-sanity_id";
static IDX_MATCH_MATCH_DATE: &str = "idx-match-match_date";
static FK_MATCH_HOME_TEAM_ID: &str = "fk-match-home_team_id";
static FK_MATCH_AWAY_TEAM_ID: &str = "fk-match-away_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Match::Table)
                    .if_not_exists()
                    .col(string(Match::Id).primary_key())
                    .col(string_null(Match::HomeTeamId))
                    .col(string_null(Match::AwayTeamId))
                    .col(timestamp(Match::MatchDate))
                    .col(string_null(Match::Competition))
                    .col(string_null(Match::Venue))
                    .col(integer_null(Match::HomeScore))
                    .col(integer_null(Match::AwayScore))
                    .col(string(Match::Status))
                    .col(string_null(Match::SanityId))
                    .col(timestamp(Match::CreatedAt))
                    .col(timestamp(Match::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_SANITY_ID)
                    .table(Match::Table)
                    .col(Match::SanityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_MATCH_DATE)
                    .table(Match::Table)
                    .col(Match::MatchDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_HOME_TEAM_ID)
                    .from_tbl(Match::Table)
                    .from_col(Match::HomeTeamId)
                    .to_tbl(Teams::Table)
                    .to_col(Teams::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_AWAY_TEAM_ID)
                    .from_tbl(Match::Table)
                    .from_col(Match::AwayTeamId)
                    .to_tbl(Teams::Table)
                    .to_col(Teams::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MATCH_AWAY_TEAM_ID)
                    .table(Match::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MATCH_HOME_TEAM_ID)
                    .table(Match::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MATCH_MATCH_DATE)
                    .table(Match::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MATCH_SANITY_ID)
                    .table(Match::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Match::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Match {
    Table,
    Id,
    HomeTeamId,
    AwayTeamId,
    MatchDate,
    Competition,
    Venue,
    HomeScore,
    AwayScore,
    Status,
    SanityId,
    CreatedAt,
    UpdatedAt,
}
