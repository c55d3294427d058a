//! Player routes, nested under their team for creation and listing.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::players::{self, Player, PlayerCreate, PlayerUpdate};
use crate::repos::teams;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreatePlayerRequest {
    name: String,
    jersey_number: Option<i16>,
    position: Option<String>,
    contact_email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdatePlayerRequest {
    name: Option<String>,
    jersey_number: Option<i16>,
    position: Option<String>,
    contact_email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
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

impl From<Player> for PlayerResponse {
    fn from(p: Player) -> Self {
        Self {
            id: p.id,
            team_id: p.team_id,
            tournament_id: p.tournament_id,
            name: p.name,
            jersey_number: p.jersey_number,
            position: p.position,
            contact_email: p.contact_email,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// POST /api/teams/{team_id}/players
async fn create_player(
    http_req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<CreatePlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    let req = body.into_inner();
    if req.name.trim().is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::ValidationError,
            "Player name must not be empty",
        ));
    }

    let player = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let team = teams::require_team(txn, team_id).await?;
            Ok(players::create_player(
                txn,
                PlayerCreate {
                    team_id,
                    tournament_id: team.tournament_id,
                    name: req.name,
                    jersey_number: req.jersey_number,
                    position: req.position,
                    contact_email: req.contact_email,
                },
            )
            .await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(PlayerResponse::from(player)))
}

/// GET /api/teams/{team_id}/players
async fn list_players(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let team_id = path.into_inner();
    let player_list = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            teams::require_team(txn, team_id).await?;
            Ok(players::list_by_team(txn, team_id).await?)
        })
    })
    .await?;

    let body: Vec<PlayerResponse> = player_list.into_iter().map(PlayerResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/players/{player_id}
async fn get_player(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    let player = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(players::require_player(txn, player_id).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(PlayerResponse::from(player)))
}

/// PATCH /api/players/{player_id}
async fn update_player(
    http_req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdatePlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    let req = body.into_inner();
    let dto = PlayerUpdate {
        name: req.name,
        jersey_number: req.jersey_number.map(Some),
        position: req.position.map(Some),
        contact_email: req.contact_email.map(Some),
    };

    let player = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            players::require_player(txn, player_id).await?;
            Ok(players::update_player(txn, player_id, dto).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(PlayerResponse::from(player)))
}

/// DELETE /api/players/{player_id}
async fn delete_player(
    http_req: HttpRequest,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            players::require_player(txn, player_id).await?;
            players::delete_player(txn, player_id).await?;
            Ok(())
        })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/teams/{team_id}/players")
            .route(web::post().to(create_player))
            .route(web::get().to(list_players)),
    );
    cfg.service(
        web::resource("/api/players/{player_id}")
            .route(web::get().to(get_player))
            .route(web::patch().to(update_player))
            .route(web::delete().to(delete_player)),
    );
}
