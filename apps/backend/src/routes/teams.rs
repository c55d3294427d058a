//! Team routes, nested under their tournament for creation and listing.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::teams::{self, Team, TeamCreate};
use crate::repos::tournaments;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreateTeamRequest {
    name: String,
}

#[derive(Debug, Deserialize)]
struct UpdateTeamRequest {
    name: String,
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: i64,
    pub tournament_id: i64,
    pub name: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<Team> for TeamResponse {
    fn from(t: Team) -> Self {
        Self {
            id: t.id,
            tournament_id: t.tournament_id,
            name: t.name,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// POST /api/tournaments/{tournament_id}/teams
async fn create_team(
    http_req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<CreateTeamRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    let name = body.into_inner().name;
    if name.trim().is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::ValidationError,
            "Team name must not be empty",
        ));
    }

    let team = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            tournaments::require_tournament(txn, tournament_id).await?;
            Ok(teams::create_team(
                txn,
                TeamCreate {
                    tournament_id,
                    name,
                },
            )
            .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(TeamResponse::from(team)))
}

/// GET /api/tournaments/{tournament_id}/teams
async fn list_teams(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let tournament_id = path.into_inner();
    let team_list = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            tournaments::require_tournament(txn, tournament_id).await?;
            Ok(teams::list_by_tournament(txn, tournament_id).await?)
        })
    })
    .await?;

    let body: Vec<TeamResponse> = team_list.into_iter().map(TeamResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/teams/{team_id}
async fn get_team(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    let team = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(teams::require_team(txn, team_id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(TeamResponse::from(team)))
}

/// PATCH /api/teams/{team_id}
async fn update_team(
    http_req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateTeamRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    let name = body.into_inner().name;
    if name.trim().is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::ValidationError,
            "Team name must not be empty",
        ));
    }

    let team = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            teams::require_team(txn, team_id).await?;
            Ok(teams::update_team_name(txn, team_id, name).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(TeamResponse::from(team)))
}

/// DELETE /api/teams/{team_id}
async fn delete_team(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            teams::require_team(txn, team_id).await?;
            teams::delete_team(txn, team_id).await?;
            Ok(())
        })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/tournaments/{tournament_id}/teams")
            .route(web::post().to(create_team))
            .route(web::get().to(list_teams)),
    );
    cfg.service(
        web::resource("/api/teams/{team_id}")
            .route(web::get().to(get_team))
            .route(web::patch().to(update_team))
            .route(web::delete().to(delete_team)),
    );
}
