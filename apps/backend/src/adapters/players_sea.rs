//! SeaORM adapter for player persistence - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use time::OffsetDateTime;

use crate::entities::players;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub team_id: i64,
    pub tournament_id: i64,
    pub name: String,
    pub jersey_number: Option<i16>,
    pub position: Option<String>,
    pub contact_email: Option<String>,
}

/// Update DTO; `None` leaves a field untouched, `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub jersey_number: Option<Option<i16>>,
    pub position: Option<Option<String>>,
    pub contact_email: Option<Option<String>>,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<players::Model, sea_orm::DbErr> {
    find_by_id(conn, player_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Player not found".to_string()))
}

pub async fn list_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::TeamId.eq(team_id))
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

pub async fn list_by_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::TournamentId.eq(tournament_id))
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = players::ActiveModel {
        id: NotSet,
        team_id: Set(dto.team_id),
        tournament_id: Set(dto.tournament_id),
        name: Set(dto.name),
        jersey_number: Set(dto.jersey_number),
        position: Set(dto.position),
        contact_email: Set(dto.contact_email),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    dto: PlayerUpdate,
) -> Result<players::Model, sea_orm::DbErr> {
    let existing = require_player(conn, player_id).await?;
    let mut active: players::ActiveModel = existing.into();

    if let Some(name) = dto.name {
        active.name = Set(name);
    }
    if let Some(jersey_number) = dto.jersey_number {
        active.jersey_number = Set(jersey_number);
    }
    if let Some(position) = dto.position {
        active.position = Set(position);
    }
    if let Some(contact_email) = dto.contact_email {
        active.contact_email = Set(contact_email);
    }
    active.updated_at = Set(OffsetDateTime::now_utc());

    active.update(conn).await
}

pub async fn delete_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = players::Entity::delete_many()
        .filter(players::Column::Id.eq(player_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
