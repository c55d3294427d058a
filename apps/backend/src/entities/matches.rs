use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "match_status")]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "match_bracket")]
#[serde(rename_all = "snake_case")]
pub enum MatchBracket {
    #[sea_orm(string_value = "winners")]
    Winners,
    #[sea_orm(string_value = "losers")]
    Losers,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "tournament_id")]
    pub tournament_id: i64,
    #[sea_orm(column_type = "SmallInteger")]
    pub round: i16,
    #[sea_orm(column_name = "round_name")]
    pub round_name: String,
    #[sea_orm(column_name = "match_number")]
    pub match_number: i32,
    pub bracket: MatchBracket,
    #[sea_orm(column_name = "team1_id")]
    pub team1_id: i64,
    #[sea_orm(column_name = "team2_id")]
    pub team2_id: i64,
    #[sea_orm(column_name = "team1_score")]
    pub team1_score: i32,
    #[sea_orm(column_name = "team2_score")]
    pub team2_score: i32,
    // Nullable: legacy matches predate per-player goal tracking
    #[sea_orm(column_name = "team1_player_goals", nullable)]
    pub team1_player_goals: Option<i32>,
    #[sea_orm(column_name = "team2_player_goals", nullable)]
    pub team2_player_goals: Option<i32>,
    #[sea_orm(column_name = "winner_id", nullable)]
    pub winner_id: Option<i64>,
    pub status: MatchStatus,
    #[sea_orm(column_name = "scheduled_date", nullable)]
    pub scheduled_date: Option<OffsetDateTime>,
    pub venue: Option<String>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tournaments::Entity",
        from = "Column::TournamentId",
        to = "super::tournaments::Column::Id"
    )]
    Tournament,
    #[sea_orm(has_many = "super::sub_matches::Entity")]
    SubMatches,
}

impl Related<super::tournaments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl Related<super::sub_matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubMatches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
