//! Team repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::teams_sea as teams_adapter;
use crate::entities::teams;
use crate::errors::domain::{DomainError, NotFoundKind};

pub use teams_adapter::TeamCreate;

/// Team domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i64,
    pub tournament_id: i64,
    pub name: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<teams::Model> for Team {
    fn from(m: teams::Model) -> Self {
        Self {
            id: m.id,
            tournament_id: m.tournament_id,
            name: m.name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Option<Team>, DomainError> {
    let t = teams_adapter::find_by_id(conn, team_id).await?;
    Ok(t.map(Team::from))
}

pub async fn require_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Team, DomainError> {
    find_by_id(conn, team_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Team, format!("Team {team_id} not found"))
    })
}

pub async fn list_by_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Vec<Team>, DomainError> {
    let ts = teams_adapter::list_by_tournament(conn, tournament_id).await?;
    Ok(ts.into_iter().map(Team::from).collect())
}

pub async fn create_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TeamCreate,
) -> Result<Team, DomainError> {
    let t = teams_adapter::create_team(conn, dto).await?;
    Ok(Team::from(t))
}

pub async fn update_team_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    name: String,
) -> Result<Team, DomainError> {
    let t = teams_adapter::update_team_name(conn, team_id, name).await?;
    Ok(Team::from(t))
}

pub async fn delete_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<bool, DomainError> {
    let rows = teams_adapter::delete_team(conn, team_id).await?;
    Ok(rows > 0)
}
