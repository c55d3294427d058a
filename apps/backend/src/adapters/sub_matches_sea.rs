//! SeaORM adapter for sub-match persistence - generic over ConnectionTrait.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entities::matches::MatchStatus;
use crate::entities::sub_matches;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

#[derive(Debug, Clone)]
pub struct SubMatchCreate {
    pub parent_match_id: i64,
    pub match_order: i16,
    pub team1_player_id: i64,
    pub team2_player_id: i64,
    pub team1_player_goals: i32,
    pub team2_player_goals: i32,
}

pub async fn list_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    parent_match_id: i64,
) -> Result<Vec<sub_matches::Model>, sea_orm::DbErr> {
    sub_matches::Entity::find()
        .filter(sub_matches::Column::ParentMatchId.eq(parent_match_id))
        .order_by_asc(sub_matches::Column::MatchOrder)
        .all(conn)
        .await
}

/// Replace all sub-matches of a match atomically within the caller's
/// transaction. Resubmitting a result always supersedes the previous
/// breakdown rather than appending to it.
pub async fn replace_for_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    parent_match_id: i64,
    subs: Vec<SubMatchCreate>,
) -> Result<(), sea_orm::DbErr> {
    delete_by_match(conn, parent_match_id).await?;

    if subs.is_empty() {
        return Ok(());
    }

    let now = OffsetDateTime::now_utc();
    let actives: Vec<sub_matches::ActiveModel> = subs
        .into_iter()
        .map(|dto| sub_matches::ActiveModel {
            id: NotSet,
            parent_match_id: Set(dto.parent_match_id),
            match_order: Set(dto.match_order),
            team1_player_id: Set(dto.team1_player_id),
            team2_player_id: Set(dto.team2_player_id),
            team1_player_goals: Set(dto.team1_player_goals),
            team2_player_goals: Set(dto.team2_player_goals),
            status: Set(MatchStatus::Completed),
            created_at: Set(now),
        })
        .collect();

    sub_matches::Entity::insert_many(actives).exec(conn).await?;
    Ok(())
}

pub async fn delete_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    parent_match_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = sub_matches::Entity::delete_many()
        .filter(sub_matches::Column::ParentMatchId.eq(parent_match_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
