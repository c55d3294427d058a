//! SeaORM adapter for tournament persistence - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use time::{Date, OffsetDateTime};

use crate::entities::tournaments;
use crate::entities::tournaments::{ScoringSystem, TournamentFormat};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

#[derive(Debug, Clone)]
pub struct TournamentCreate {
    pub name: String,
    pub sport: String,
    pub format: TournamentFormat,
    pub scoring_system: ScoringSystem,
    pub location: Option<String>,
    pub start_date: Option<Date>,
}

/// Metadata update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct TournamentUpdate {
    pub name: Option<String>,
    pub sport: Option<String>,
    pub location: Option<Option<String>>,
    pub start_date: Option<Option<Date>>,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Option<tournaments::Model>, sea_orm::DbErr> {
    tournaments::Entity::find_by_id(tournament_id).one(conn).await
}

/// Find tournament by ID or return RecordNotFound error.
pub async fn require_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<tournaments::Model, sea_orm::DbErr> {
    find_by_id(conn, tournament_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Tournament not found".to_string()))
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<tournaments::Model>, sea_orm::DbErr> {
    tournaments::Entity::find()
        .order_by_desc(tournaments::Column::CreatedAt)
        .all(conn)
        .await
}

pub async fn create_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TournamentCreate,
) -> Result<tournaments::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = tournaments::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        sport: Set(dto.sport),
        format: Set(dto.format),
        scoring_system: Set(dto.scoring_system),
        location: Set(dto.location),
        start_date: Set(dto.start_date),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn update_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    dto: TournamentUpdate,
) -> Result<tournaments::Model, sea_orm::DbErr> {
    let existing = require_tournament(conn, tournament_id).await?;
    let mut active: tournaments::ActiveModel = existing.into();

    if let Some(name) = dto.name {
        active.name = Set(name);
    }
    if let Some(sport) = dto.sport {
        active.sport = Set(sport);
    }
    if let Some(location) = dto.location {
        active.location = Set(location);
    }
    if let Some(start_date) = dto.start_date {
        active.start_date = Set(start_date);
    }
    active.updated_at = Set(OffsetDateTime::now_utc());

    active.update(conn).await
}

/// Delete a tournament; teams, players, matches and sub-matches go with
/// it via ON DELETE CASCADE.
pub async fn delete_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = tournaments::Entity::delete_many()
        .filter(tournaments::Column::Id.eq(tournament_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
