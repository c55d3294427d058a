use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, Expr, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Tournaments {
    Table,
    Id,
    Name,
    Sport,
    Format,
    ScoringSystem,
    Location,
    StartDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Teams {
    Table,
    Id,
    TournamentId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    TeamId,
    TournamentId,
    Name,
    JerseyNumber,
    Position,
    ContactEmail,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Matches {
    Table,
    Id,
    TournamentId,
    Round,
    RoundName,
    MatchNumber,
    Bracket,
    Team1Id,
    Team2Id,
    Team1Score,
    Team2Score,
    Team1PlayerGoals,
    Team2PlayerGoals,
    WinnerId,
    Status,
    ScheduledDate,
    Venue,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum SubMatches {
    Table,
    Id,
    ParentMatchId,
    MatchOrder,
    Team1PlayerId,
    Team2PlayerId,
    Team1PlayerGoals,
    Team2PlayerGoals,
    Status,
    CreatedAt,
}

#[derive(Iden)]
enum TournamentFormatEnum {
    #[iden = "tournament_format"]
    Type,
}

#[derive(Iden)]
enum ScoringSystemEnum {
    #[iden = "scoring_system"]
    Type,
}

#[derive(Iden)]
enum MatchStatusEnum {
    #[iden = "match_status"]
    Type,
}

#[derive(Iden)]
enum MatchBracketEnum {
    #[iden = "match_bracket"]
    Type,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Postgres enums first; tables reference them
        manager
            .create_type(
                PgType::create()
                    .as_enum(TournamentFormatEnum::Type)
                    .values([
                        "round_robin",
                        "knockout",
                        "double_elimination",
                        "group_stage",
                        "swiss",
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                PgType::create()
                    .as_enum(ScoringSystemEnum::Type)
                    .values(["goal_based", "win_based"])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                PgType::create()
                    .as_enum(MatchStatusEnum::Type)
                    .values(["scheduled", "in_progress", "completed"])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                PgType::create()
                    .as_enum(MatchBracketEnum::Type)
                    .values(["winners", "losers"])
                    .to_owned(),
            )
            .await?;

        // tournaments
        manager
            .create_table(
                Table::create()
                    .table(Tournaments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tournaments::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Tournaments::Name).string().not_null())
                    .col(ColumnDef::new(Tournaments::Sport).string().not_null())
                    .col(
                        ColumnDef::new(Tournaments::Format)
                            .custom(TournamentFormatEnum::Type)
                            .not_null()
                            .default("round_robin"),
                    )
                    .col(
                        ColumnDef::new(Tournaments::ScoringSystem)
                            .custom(ScoringSystemEnum::Type)
                            .not_null()
                            .default("win_based"),
                    )
                    .col(ColumnDef::new(Tournaments::Location).string().null())
                    .col(ColumnDef::new(Tournaments::StartDate).date().null())
                    .col(
                        ColumnDef::new(Tournaments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tournaments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // teams
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teams::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Teams::TournamentId).big_integer().not_null())
                    .col(ColumnDef::new(Teams::Name).string().not_null())
                    .col(
                        ColumnDef::new(Teams::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Teams::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teams_tournament_id")
                            .from(Teams::Table, Teams::TournamentId)
                            .to(Tournaments::Table, Tournaments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teams_tournament_id")
                    .table(Teams::Table)
                    .col(Teams::TournamentId)
                    .to_owned(),
            )
            .await?;

        // players (owned by a team; cascade with it)
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::TeamId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Players::TournamentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(
                        ColumnDef::new(Players::JerseyNumber)
                            .small_integer()
                            .null()
                            .check(Expr::col(Players::JerseyNumber).gte(0)),
                    )
                    .col(ColumnDef::new(Players::Position).string().null())
                    .col(ColumnDef::new(Players::ContactEmail).string().null())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_team_id")
                            .from(Players::Table, Players::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_tournament_id")
                            .from(Players::Table, Players::TournamentId)
                            .to(Tournaments::Table, Tournaments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // jersey numbers unique per team when present
        manager
            .create_index(
                Index::create()
                    .name("ux_players_team_jersey")
                    .table(Players::Table)
                    .col(Players::TeamId)
                    .col(Players::JerseyNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // matches
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Matches::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Matches::TournamentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Matches::Round)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Matches::RoundName).string().not_null())
                    .col(ColumnDef::new(Matches::MatchNumber).integer().not_null())
                    .col(
                        ColumnDef::new(Matches::Bracket)
                            .custom(MatchBracketEnum::Type)
                            .not_null()
                            .default("winners"),
                    )
                    .col(ColumnDef::new(Matches::Team1Id).big_integer().not_null())
                    .col(ColumnDef::new(Matches::Team2Id).big_integer().not_null())
                    .col(
                        ColumnDef::new(Matches::Team1Score)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Matches::Team2Score)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Matches::Team1PlayerGoals)
                            .integer()
                            .null()
                            .check(Expr::col(Matches::Team1PlayerGoals).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Matches::Team2PlayerGoals)
                            .integer()
                            .null()
                            .check(Expr::col(Matches::Team2PlayerGoals).gte(0)),
                    )
                    .col(ColumnDef::new(Matches::WinnerId).big_integer().null())
                    .col(
                        ColumnDef::new(Matches::Status)
                            .custom(MatchStatusEnum::Type)
                            .not_null()
                            .default("scheduled"),
                    )
                    .col(
                        ColumnDef::new(Matches::ScheduledDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Matches::Venue).string().null())
                    .col(
                        ColumnDef::new(Matches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Matches::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_tournament_id")
                            .from(Matches::Table, Matches::TournamentId)
                            .to(Tournaments::Table, Tournaments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_team1_id")
                            .from(Matches::Table, Matches::Team1Id)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_team2_id")
                            .from(Matches::Table, Matches::Team2Id)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matches_tournament_round")
                    .table(Matches::Table)
                    .col(Matches::TournamentId)
                    .col(Matches::Round)
                    .to_owned(),
            )
            .await?;

        // sub_matches (individual matchups inside a team match)
        manager
            .create_table(
                Table::create()
                    .table(SubMatches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubMatches::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(SubMatches::ParentMatchId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubMatches::MatchOrder)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubMatches::Team1PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubMatches::Team2PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubMatches::Team1PlayerGoals)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(SubMatches::Team1PlayerGoals).gte(0)),
                    )
                    .col(
                        ColumnDef::new(SubMatches::Team2PlayerGoals)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(SubMatches::Team2PlayerGoals).gte(0)),
                    )
                    .col(
                        ColumnDef::new(SubMatches::Status)
                            .custom(MatchStatusEnum::Type)
                            .not_null()
                            .default("scheduled"),
                    )
                    .col(
                        ColumnDef::new(SubMatches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_matches_parent_match_id")
                            .from(SubMatches::Table, SubMatches::ParentMatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_matches_team1_player_id")
                            .from(SubMatches::Table, SubMatches::Team1PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_matches_team2_player_id")
                            .from(SubMatches::Table, SubMatches::Team2PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sub_matches_parent_order")
                    .table(SubMatches::Table)
                    .col(SubMatches::ParentMatchId)
                    .col(SubMatches::MatchOrder)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubMatches::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Matches::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(Tournaments::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_type(PgType::drop().name(MatchBracketEnum::Type).to_owned())
            .await?;
        manager
            .drop_type(PgType::drop().name(MatchStatusEnum::Type).to_owned())
            .await?;
        manager
            .drop_type(PgType::drop().name(ScoringSystemEnum::Type).to_owned())
            .await?;
        manager
            .drop_type(PgType::drop().name(TournamentFormatEnum::Type).to_owned())
            .await?;

        Ok(())
    }
}
