//! SeaORM adapter for team persistence - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use time::OffsetDateTime;

use crate::entities::teams;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

#[derive(Debug, Clone)]
pub struct TeamCreate {
    pub tournament_id: i64,
    pub name: String,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Option<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find_by_id(team_id).one(conn).await
}

pub async fn require_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<teams::Model, sea_orm::DbErr> {
    find_by_id(conn, team_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Team not found".to_string()))
}

/// Teams in insertion order; standings tie-breaking relies on this
/// being stable.
pub async fn list_by_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Vec<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find()
        .filter(teams::Column::TournamentId.eq(tournament_id))
        .order_by_asc(teams::Column::Id)
        .all(conn)
        .await
}

pub async fn create_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TeamCreate,
) -> Result<teams::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = teams::ActiveModel {
        id: NotSet,
        tournament_id: Set(dto.tournament_id),
        name: Set(dto.name),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn update_team_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    name: String,
) -> Result<teams::Model, sea_orm::DbErr> {
    let existing = require_team(conn, team_id).await?;
    let mut active: teams::ActiveModel = existing.into();
    active.name = Set(name);
    active.updated_at = Set(OffsetDateTime::now_utc());
    active.update(conn).await
}

pub async fn delete_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = teams::Entity::delete_many()
        .filter(teams::Column::Id.eq(team_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
