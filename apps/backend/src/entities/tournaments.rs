use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "tournament_format")]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    #[sea_orm(string_value = "round_robin")]
    RoundRobin,
    #[sea_orm(string_value = "knockout")]
    Knockout,
    #[sea_orm(string_value = "double_elimination")]
    DoubleElimination,
    #[sea_orm(string_value = "group_stage")]
    GroupStage,
    #[sea_orm(string_value = "swiss")]
    Swiss,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "scoring_system")]
#[serde(rename_all = "snake_case")]
pub enum ScoringSystem {
    #[sea_orm(string_value = "goal_based")]
    GoalBased,
    #[sea_orm(string_value = "win_based")]
    WinBased,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tournaments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub sport: String,
    pub format: TournamentFormat,
    #[sea_orm(column_name = "scoring_system")]
    pub scoring_system: ScoringSystem,
    pub location: Option<String>,
    #[sea_orm(column_name = "start_date")]
    pub start_date: Option<Date>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teams::Entity")]
    Teams,
    #[sea_orm(has_many = "super::matches::Entity")]
    Matches,
}

impl Related<super::teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teams.def()
    }
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
