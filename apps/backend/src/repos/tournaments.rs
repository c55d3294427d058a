//! Tournament repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use time::Date;

use crate::adapters::tournaments_sea as tournaments_adapter;
use crate::domain::{ScoringSystem, TournamentFormat};
use crate::entities::tournaments;
use crate::errors::domain::DomainError;

pub use tournaments_adapter::{TournamentCreate, TournamentUpdate};

/// Tournament domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub sport: String,
    pub format: TournamentFormat,
    pub scoring_system: ScoringSystem,
    pub location: Option<String>,
    pub start_date: Option<Date>,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<tournaments::Model> for Tournament {
    fn from(m: tournaments::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            sport: m.sport,
            format: m.format.into(),
            scoring_system: m.scoring_system.into(),
            location: m.location,
            start_date: m.start_date,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

// Entity enums carry the same variants as the domain enums; convert at
// the repo boundary so the domain stays free of SeaORM types.

impl From<tournaments::TournamentFormat> for TournamentFormat {
    fn from(f: tournaments::TournamentFormat) -> Self {
        match f {
            tournaments::TournamentFormat::RoundRobin => Self::RoundRobin,
            tournaments::TournamentFormat::Knockout => Self::Knockout,
            tournaments::TournamentFormat::DoubleElimination => Self::DoubleElimination,
            tournaments::TournamentFormat::GroupStage => Self::GroupStage,
            tournaments::TournamentFormat::Swiss => Self::Swiss,
        }
    }
}

impl From<TournamentFormat> for tournaments::TournamentFormat {
    fn from(f: TournamentFormat) -> Self {
        match f {
            TournamentFormat::RoundRobin => Self::RoundRobin,
            TournamentFormat::Knockout => Self::Knockout,
            TournamentFormat::DoubleElimination => Self::DoubleElimination,
            TournamentFormat::GroupStage => Self::GroupStage,
            TournamentFormat::Swiss => Self::Swiss,
        }
    }
}

impl From<tournaments::ScoringSystem> for ScoringSystem {
    fn from(s: tournaments::ScoringSystem) -> Self {
        match s {
            tournaments::ScoringSystem::GoalBased => Self::GoalBased,
            tournaments::ScoringSystem::WinBased => Self::WinBased,
        }
    }
}

impl From<ScoringSystem> for tournaments::ScoringSystem {
    fn from(s: ScoringSystem) -> Self {
        match s {
            ScoringSystem::GoalBased => Self::GoalBased,
            ScoringSystem::WinBased => Self::WinBased,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Option<Tournament>, DomainError> {
    let t = tournaments_adapter::find_by_id(conn, tournament_id).await?;
    Ok(t.map(Tournament::from))
}

/// Find tournament by ID or return a typed not-found error.
pub async fn require_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Tournament, DomainError> {
    find_by_id(conn, tournament_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(
                crate::errors::domain::NotFoundKind::Tournament,
                format!("Tournament {tournament_id} not found"),
            )
        })
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Tournament>, DomainError> {
    let ts = tournaments_adapter::list_all(conn).await?;
    Ok(ts.into_iter().map(Tournament::from).collect())
}

pub async fn create_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TournamentCreate,
) -> Result<Tournament, DomainError> {
    let t = tournaments_adapter::create_tournament(conn, dto).await?;
    Ok(Tournament::from(t))
}

pub async fn update_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    dto: TournamentUpdate,
) -> Result<Tournament, DomainError> {
    let t = tournaments_adapter::update_tournament(conn, tournament_id, dto).await?;
    Ok(Tournament::from(t))
}

pub async fn delete_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<bool, DomainError> {
    let rows = tournaments_adapter::delete_tournament(conn, tournament_id).await?;
    Ok(rows > 0)
}
