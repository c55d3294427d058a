use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::matches::MatchStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sub_matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "parent_match_id")]
    pub parent_match_id: i64,
    #[sea_orm(column_name = "match_order", column_type = "SmallInteger")]
    pub match_order: i16,
    #[sea_orm(column_name = "team1_player_id")]
    pub team1_player_id: i64,
    #[sea_orm(column_name = "team2_player_id")]
    pub team2_player_id: i64,
    #[sea_orm(column_name = "team1_player_goals")]
    pub team1_player_goals: i32,
    #[sea_orm(column_name = "team2_player_goals")]
    pub team2_player_goals: i32,
    pub status: MatchStatus,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::matches::Entity",
        from = "Column::ParentMatchId",
        to = "super::matches::Column::Id"
    )]
    ParentMatch,
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParentMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
