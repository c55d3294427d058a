//! Sub-match repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::sub_matches_sea as sub_matches_adapter;
use crate::entities::sub_matches;
use crate::errors::domain::DomainError;

pub use sub_matches_adapter::SubMatchCreate;

/// Sub-match domain model (individual player-vs-player matchup inside
/// a team match)
#[derive(Debug, Clone, PartialEq)]
pub struct SubMatch {
    pub id: i64,
    pub parent_match_id: i64,
    pub match_order: i16,
    pub team1_player_id: i64,
    pub team2_player_id: i64,
    pub team1_player_goals: i32,
    pub team2_player_goals: i32,
    pub created_at: time::OffsetDateTime,
}

impl From<sub_matches::Model> for SubMatch {
    fn from(m: sub_matches::Model) -> Self {
        Self {
            id: m.id,
            parent_match_id: m.parent_match_id,
            match_order: m.match_order,
            team1_player_id: m.team1_player_id,
            team2_player_id: m.team2_player_id,
            team1_player_goals: m.team1_player_goals,
            team2_player_goals: m.team2_player_goals,
            created_at: m.created_at,
        }
    }
}

pub async fn list_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    parent_match_id: i64,
) -> Result<Vec<SubMatch>, DomainError> {
    let subs = sub_matches_adapter::list_by_match(conn, parent_match_id).await?;
    Ok(subs.into_iter().map(SubMatch::from).collect())
}

pub async fn replace_for_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    parent_match_id: i64,
    subs: Vec<SubMatchCreate>,
) -> Result<(), DomainError> {
    Ok(sub_matches_adapter::replace_for_match(conn, parent_match_id, subs).await?)
}
