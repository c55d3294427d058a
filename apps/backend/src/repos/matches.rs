//! Match repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::matches_sea as matches_adapter;
use crate::domain::Bracket;
use crate::entities::matches;
use crate::entities::matches::{MatchBracket, MatchStatus};
use crate::errors::domain::{DomainError, NotFoundKind};

pub use matches_adapter::{MatchCreate, MatchResultUpdate};

/// Match domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: i64,
    pub tournament_id: i64,
    pub round: i16,
    pub round_name: String,
    pub match_number: i32,
    pub bracket: Bracket,
    pub team1_id: i64,
    pub team2_id: i64,
    pub team1_score: i32,
    pub team2_score: i32,
    pub team1_player_goals: Option<i32>,
    pub team2_player_goals: Option<i32>,
    pub winner_id: Option<i64>,
    pub status: MatchStatus,
    pub scheduled_date: Option<time::OffsetDateTime>,
    pub venue: Option<String>,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl Match {
    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Goals actually scored by each side. Player-goal totals are
    /// authoritative when present; matches recorded before per-player
    /// tracking fall back to the stored scores, which were goals in
    /// that era.
    pub fn goals(&self) -> (u32, u32) {
        let t1 = self
            .team1_player_goals
            .unwrap_or(self.team1_score)
            .max(0) as u32;
        let t2 = self
            .team2_player_goals
            .unwrap_or(self.team2_score)
            .max(0) as u32;
        (t1, t2)
    }
}

impl From<matches::Model> for Match {
    fn from(m: matches::Model) -> Self {
        Self {
            id: m.id,
            tournament_id: m.tournament_id,
            round: m.round,
            round_name: m.round_name,
            match_number: m.match_number,
            bracket: m.bracket.into(),
            team1_id: m.team1_id,
            team2_id: m.team2_id,
            team1_score: m.team1_score,
            team2_score: m.team2_score,
            team1_player_goals: m.team1_player_goals,
            team2_player_goals: m.team2_player_goals,
            winner_id: m.winner_id,
            status: m.status,
            scheduled_date: m.scheduled_date,
            venue: m.venue,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<MatchBracket> for Bracket {
    fn from(b: MatchBracket) -> Self {
        match b {
            MatchBracket::Winners => Self::Winners,
            MatchBracket::Losers => Self::Losers,
        }
    }
}

impl From<Bracket> for MatchBracket {
    fn from(b: Bracket) -> Self {
        match b {
            Bracket::Winners => Self::Winners,
            Bracket::Losers => Self::Losers,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Option<Match>, DomainError> {
    let m = matches_adapter::find_by_id(conn, match_id).await?;
    Ok(m.map(Match::from))
}

pub async fn require_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Match, DomainError> {
    find_by_id(conn, match_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Match, format!("Match {match_id} not found"))
    })
}

pub async fn list_by_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Vec<Match>, DomainError> {
    let ms = matches_adapter::list_by_tournament(conn, tournament_id).await?;
    Ok(ms.into_iter().map(Match::from).collect())
}

pub async fn list_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    round: i16,
) -> Result<Vec<Match>, DomainError> {
    let ms = matches_adapter::list_by_round(conn, tournament_id, round).await?;
    Ok(ms.into_iter().map(Match::from).collect())
}

pub async fn count_by_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<u64, DomainError> {
    Ok(matches_adapter::count_by_tournament(conn, tournament_id).await?)
}

pub async fn insert_fixtures<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fixtures: Vec<MatchCreate>,
) -> Result<(), DomainError> {
    Ok(matches_adapter::insert_many(conn, fixtures).await?)
}

pub async fn update_result<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    dto: MatchResultUpdate,
) -> Result<Match, DomainError> {
    let m = matches_adapter::update_result(conn, match_id, dto).await?;
    Ok(Match::from(m))
}

pub async fn delete_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<bool, DomainError> {
    let rows = matches_adapter::delete_match(conn, match_id).await?;
    Ok(rows > 0)
}
