//! SeaORM adapter for match persistence - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entities::matches;
use crate::entities::matches::{MatchBracket, MatchStatus};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

#[derive(Debug, Clone)]
pub struct MatchCreate {
    pub tournament_id: i64,
    pub round: i16,
    pub round_name: String,
    pub match_number: i32,
    pub bracket: MatchBracket,
    pub team1_id: i64,
    pub team2_id: i64,
    pub scheduled_date: Option<OffsetDateTime>,
    pub venue: Option<String>,
}

/// Result update applied when a score is submitted.
#[derive(Debug, Clone)]
pub struct MatchResultUpdate {
    pub team1_score: i32,
    pub team2_score: i32,
    pub team1_player_goals: Option<i32>,
    pub team2_player_goals: Option<i32>,
    pub winner_id: Option<i64>,
    pub status: MatchStatus,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Option<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find_by_id(match_id).one(conn).await
}

pub async fn require_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<matches::Model, sea_orm::DbErr> {
    find_by_id(conn, match_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Match not found".to_string()))
}

pub async fn list_by_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Vec<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find()
        .filter(matches::Column::TournamentId.eq(tournament_id))
        .order_by_asc(matches::Column::Round)
        .order_by_asc(matches::Column::MatchNumber)
        .all(conn)
        .await
}

pub async fn list_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    round: i16,
) -> Result<Vec<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find()
        .filter(matches::Column::TournamentId.eq(tournament_id))
        .filter(matches::Column::Round.eq(round))
        .order_by_asc(matches::Column::MatchNumber)
        .all(conn)
        .await
}

pub async fn count_by_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    matches::Entity::find()
        .filter(matches::Column::TournamentId.eq(tournament_id))
        .count(conn)
        .await
}

pub async fn insert_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixtures: Vec<MatchCreate>,
) -> Result<(), sea_orm::DbErr> {
    if fixtures.is_empty() {
        return Ok(());
    }
    let now = OffsetDateTime::now_utc();
    let actives: Vec<matches::ActiveModel> = fixtures
        .into_iter()
        .map(|dto| matches::ActiveModel {
            id: NotSet,
            tournament_id: Set(dto.tournament_id),
            round: Set(dto.round),
            round_name: Set(dto.round_name),
            match_number: Set(dto.match_number),
            bracket: Set(dto.bracket),
            team1_id: Set(dto.team1_id),
            team2_id: Set(dto.team2_id),
            team1_score: Set(0),
            team2_score: Set(0),
            team1_player_goals: Set(None),
            team2_player_goals: Set(None),
            winner_id: Set(None),
            status: Set(MatchStatus::Scheduled),
            scheduled_date: Set(dto.scheduled_date),
            venue: Set(dto.venue),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .collect();

    matches::Entity::insert_many(actives).exec(conn).await?;
    Ok(())
}

pub async fn update_result<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    dto: MatchResultUpdate,
) -> Result<matches::Model, sea_orm::DbErr> {
    let existing = require_match(conn, match_id).await?;
    let mut active: matches::ActiveModel = existing.into();

    active.team1_score = Set(dto.team1_score);
    active.team2_score = Set(dto.team2_score);
    active.team1_player_goals = Set(dto.team1_player_goals);
    active.team2_player_goals = Set(dto.team2_player_goals);
    active.winner_id = Set(dto.winner_id);
    active.status = Set(dto.status);
    active.updated_at = Set(OffsetDateTime::now_utc());

    active.update(conn).await
}

pub async fn delete_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = matches::Entity::delete_many()
        .filter(matches::Column::Id.eq(match_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
