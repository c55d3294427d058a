//! Player repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::{DomainError, NotFoundKind};

pub use players_adapter::{PlayerCreate, PlayerUpdate};

/// Player domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub team_id: i64,
    pub tournament_id: i64,
    pub name: String,
    pub jersey_number: Option<i16>,
    pub position: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<players::Model> for Player {
    fn from(m: players::Model) -> Self {
        Self {
            id: m.id,
            team_id: m.team_id,
            tournament_id: m.tournament_id,
            name: m.name,
            jersey_number: m.jersey_number,
            position: m.position,
            contact_email: m.contact_email,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<Player>, DomainError> {
    let p = players_adapter::find_by_id(conn, player_id).await?;
    Ok(p.map(Player::from))
}

pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Player, DomainError> {
    find_by_id(conn, player_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("Player {player_id} not found"))
    })
}

pub async fn list_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Vec<Player>, DomainError> {
    let ps = players_adapter::list_by_team(conn, team_id).await?;
    Ok(ps.into_iter().map(Player::from).collect())
}

pub async fn list_by_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Vec<Player>, DomainError> {
    let ps = players_adapter::list_by_tournament(conn, tournament_id).await?;
    Ok(ps.into_iter().map(Player::from).collect())
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<Player, DomainError> {
    let p = players_adapter::create_player(conn, dto).await?;
    Ok(Player::from(p))
}

pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    dto: PlayerUpdate,
) -> Result<Player, DomainError> {
    let p = players_adapter::update_player(conn, player_id, dto).await?;
    Ok(Player::from(p))
}

pub async fn delete_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<bool, DomainError> {
    let rows = players_adapter::delete_player(conn, player_id).await?;
    Ok(rows > 0)
}
